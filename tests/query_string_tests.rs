use recipe_scaler::core::QueryString;

#[test]
fn reads_parameter_with_or_without_question_mark() {
    assert_eq!(QueryString::parse("?servings=4").get("servings"), Some("4"));
    assert_eq!(QueryString::parse("servings=4").get("servings"), Some("4"));
}

#[test]
fn first_occurrence_wins() {
    let query = QueryString::parse("?servings=4&servings=8");
    assert_eq!(query.get("servings"), Some("4"));
}

#[test]
fn missing_value_reads_as_empty_text() {
    let query = QueryString::parse("?lang=de&servings");
    assert_eq!(query.get("servings"), Some(""));
    assert_eq!(query.get("portions"), None);
}

#[test]
fn names_and_values_are_percent_decoded() {
    assert_eq!(
        QueryString::parse("?servings=%34%2E5").get("servings"),
        Some("4.5")
    );
    assert_eq!(QueryString::parse("?serv%69ngs=3").get("servings"), Some("3"));
    assert_eq!(QueryString::parse("?note=a+b").get("note"), Some("a b"));
    assert_eq!(QueryString::parse("?eq=a=b").get("eq"), Some("a=b"));
}

#[test]
fn empty_queries_have_no_pairs() {
    assert!(QueryString::parse("").is_empty());
    assert!(QueryString::parse("?").is_empty());
    assert!(QueryString::parse("&&").is_empty());
}

#[test]
fn pairs_keep_query_order() {
    let query = QueryString::parse("b=2&a=1");
    let pairs: Vec<(&str, &str)> = query.pairs().collect();
    assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
}

#[test]
fn malformed_escapes_are_kept_as_written() {
    let query = QueryString::parse("?x=100%&servings=2%zz");
    assert_eq!(query.get("x"), Some("100%"));
    assert_eq!(query.get("servings"), Some("2%zz"));
}

#[test]
fn utf8_escapes_and_plus_signs_decode_together() {
    let query = QueryString::parse("a+b=%C3%A9&servings=%34");
    let pairs: Vec<(&str, &str)> = query.pairs().collect();
    assert_eq!(pairs, vec![("a b", "é"), ("servings", "4")]);
}
