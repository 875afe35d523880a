//! Black-box tests: feed the driver a full scenario through its library
//! entry point and assert the exact report bytes.

use stocktally_cli::run;

fn report_for(input: &str) -> String {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out).expect("driver failed");
    String::from_utf8(out).expect("report is not utf-8")
}

#[test]
fn worked_example_matches_fixed_format() {
    let input = "2\nApple Fruit 10 5\nBanana Fruit 4 3\nFruit Apple Apple\n";
    let expected = "\
Fruit:
Product Name:Apple Category:Fruit
Product Name:Banana Category:Fruit
Apple:
Product Name:Apple Category:Fruit
Total Value:$62
Fruit:2
Fruit:
Product Name:Apple Price:5
Product Name:Banana Price:3
New Total Value:$12
";
    assert_eq!(report_for(input), expected);
}

#[test]
fn headers_print_even_when_nothing_matches() {
    let input = "1\nApple Fruit 10 5\nFrozen Durian Durian\n";
    let expected = "\
Frozen:
Durian:
Total Value:$50
Fruit:1
Fruit:
Product Name:Apple Price:5
New Total Value:$50
";
    assert_eq!(report_for(input), expected);
}

#[test]
fn queries_are_case_insensitive_but_grouping_keys_are_not() {
    let input = "2\nApple Fruit 10 5\nBanana fruit 4 3\nFRUIT apple APPLE\n";
    let expected = "\
FRUIT:
Product Name:Apple Category:Fruit
Product Name:Banana Category:fruit
apple:
Product Name:Apple Category:Fruit
Total Value:$62
Fruit:1
fruit:1
Fruit:
Product Name:Apple Price:5
fruit:
Product Name:Banana Price:3
New Total Value:$12
";
    assert_eq!(report_for(input), expected);
}

#[test]
fn removal_drops_every_matching_duplicate() {
    let input = "3\nApple Fruit 2 10\nApple Fruit 1 10\nBanana Fruit 1 7\nFruit Banana Apple\n";
    let expected = "\
Fruit:
Product Name:Apple Category:Fruit
Product Name:Apple Category:Fruit
Product Name:Banana Category:Fruit
Banana:
Product Name:Banana Category:Fruit
Total Value:$37
Fruit:3
Fruit:
Product Name:Apple Price:10
Product Name:Apple Price:10
Product Name:Banana Price:7
New Total Value:$7
";
    assert_eq!(report_for(input), expected);
}

#[test]
fn empty_inventory_still_reports_totals() {
    let input = "0\nFruit Apple Apple\n";
    let expected = "\
Fruit:
Apple:
Total Value:$0
New Total Value:$0
";
    assert_eq!(report_for(input), expected);
}

#[test]
fn malformed_count_is_an_error() {
    let mut out = Vec::new();
    assert!(run("two\n".as_bytes(), &mut out).is_err());
}

#[test]
fn truncated_input_is_an_error() {
    let mut out = Vec::new();
    assert!(run("3\nApple Fruit 10 5\n".as_bytes(), &mut out).is_err());
}
