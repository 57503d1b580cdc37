use super::*;

#[test]
fn line_puts_measure_before_name() {
    let line = ingredient_line(Ingredient { position: 1, name: "olive oil", measure: Some("1/4 cup") });
    assert_eq!(line, "1/4 cup olive oil");
}

#[test]
fn line_without_measure_is_just_the_name() {
    let line = ingredient_line(Ingredient { position: 3, name: "salt", measure: None });
    assert_eq!(line, "salt");
}
