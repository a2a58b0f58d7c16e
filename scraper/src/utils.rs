use crate::imports::*;

/// Text of the element with each text node trimmed and no separator between nodes, so that
/// `Lewiston<br>Queenston` reads as `LewistonQueenston`
pub fn element_text(elem: &ElementRef) -> String {
    element_texts(elem).concat()
}

pub fn element_texts(elem: &ElementRef) -> Vec<String> {
    elem.text().map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
