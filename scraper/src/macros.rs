macro_rules! selector {
    ($selector:literal $(,)?) => {{
        static SELECTOR: OnceCell<Selector> = OnceCell::new();
        SELECTOR.get_or_init(|| Selector::parse($selector).unwrap())
    }};
}
pub(crate) use selector;
