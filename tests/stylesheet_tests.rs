use mparse::ast::{Color, Dimension, RuleValue, Spacing, Units};
use mparse::grammar::stylesheet::{color, dimension, identifier, rule, spacing, stylesheet};
use mparse::parser::ParseResultExt;

fn px(value: i64) -> Dimension {
    Dimension {
        value,
        units: Units::Px,
    }
}

#[test]
fn identifiers() {
    assert_eq!(identifier().run(".button {").into_value(), ".button");
    assert_eq!(identifier().run("#main-nav").into_value(), "#main-nav");
    assert_eq!(identifier().run("padding:").into_value(), "padding");
    assert!(!identifier().run("1abc").is_success());
}

#[test]
fn dimensions() {
    assert_eq!(dimension().run("10px").into_value(), px(10));
    assert_eq!(
        dimension().run("50%").into_value(),
        Dimension {
            value: 50,
            units: Units::Pct
        }
    );
    assert!(!dimension().run("10em").is_success());
}

#[test]
fn hex_color() {
    let result = color().run("#A87F01;");
    assert_eq!(
        *result.value(),
        Color {
            r: 0xA8,
            g: 0x7F,
            b: 0x01
        }
    );
    assert_eq!(result.remaining().front(), Some(';'));
}

#[test]
fn rgb_color() {
    let result = color().run("rgb(0xFF, 0xA0, 0x45)");
    assert_eq!(
        *result.value(),
        Color {
            r: 0xFF,
            g: 0xA0,
            b: 0x45
        }
    );
    assert!(result.remaining().is_empty());

    assert_eq!(
        color().run("rgb (1,2,3)").into_value(),
        Color { r: 1, g: 2, b: 3 }
    );
    assert!(!color().run("rgb(1, 2)").is_success());
}

#[test]
fn spacing_shorthand() {
    let result = spacing().run("10px 22px;");
    let value = *result.value();
    assert_eq!(value.top, px(10));
    assert_eq!(value.right, px(22));
    assert_eq!(value.bottom, px(10));
    assert_eq!(value.left, px(22));
    assert_eq!(result.remaining().front(), Some(';'));

    let value = spacing().run("1px 2px 3px;").into_value();
    assert_eq!((value.top, value.right, value.bottom, value.left), (px(1), px(2), px(3), px(2)));

    assert!(!spacing().run("1px 2px 3px 4px 5px;").is_success());
}

#[test]
fn unknown_property() {
    let result = rule().run("margin: 1px;");
    assert_eq!(result.error_message(), Some("Error: unknown property margin"));
}

#[test]
fn full_stylesheet() {
    let text = "
.button {
    width: 100px;
    height: 50%;
    padding: 10px 22px;
    color: #A87F01;
}
#header {
    color: rgb(0xFF, 0xA0, 0x45);
    padding: 1px 2px 3px 4px;
}
";
    let result = stylesheet().run(text);
    assert!(result.remaining().is_empty());
    let sheet = result.into_value();

    let button = &sheet.selectors[".button"];
    assert_eq!(button.len(), 4);
    assert_eq!(button[0].property, "width");
    assert_eq!(button[0].value, RuleValue::Dimension(px(100)));
    assert_eq!(
        button[2].value,
        RuleValue::Spacing(Spacing {
            top: px(10),
            right: px(22),
            bottom: px(10),
            left: px(22),
        })
    );

    let header = &sheet.selectors["#header"];
    assert_eq!(
        header[0].value,
        RuleValue::Color(Color {
            r: 0xFF,
            g: 0xA0,
            b: 0x45
        })
    );

    assert_eq!(
        sheet.to_string(),
        "#header:\n  color = rgb(255,160,69)\n  padding = 1px,2px,3px,4px\n\
         .button:\n  width = 100px\n  height = 50%\n  padding = 10px,22px,10px,22px\n  color = rgb(168,127,1)\n"
    );
}

#[test]
fn empty_stylesheet_fails() {
    assert!(!stylesheet().run("   ").is_success());
}
