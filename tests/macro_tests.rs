use json_drip::{template, to_string, LazyRegion, Number, Template};

#[test]
fn test_macro_builds_nested_documents() {
    let doc = template!({
        "meta": {
            "page": 1,
            "next": null
        },
        "flags": [true, false],
        "name": "feed"
    });

    let out = to_string(doc).unwrap();
    assert_eq!(
        out,
        r#"{"meta":{"page":1,"next":null},"flags":[true,false],"name":"feed"}"#
    );
}

#[test]
fn test_macro_accepts_expressions() {
    let page = 3u32;
    let title = String::from("index");

    let doc = template!({
        "page": (page),
        "title": (title.clone())
    });

    let obj = match doc {
        Template::Object(map) => map,
        _ => panic!("Expected object"),
    };
    assert_eq!(obj.get("page"), Some(&Template::Number(Number::Integer(3))));
    assert_eq!(obj.get("title"), Some(&Template::String(title)));
}

#[test]
fn test_macro_embeds_lazy_regions() {
    let doc = template!({
        "rows": (lazy LazyRegion::from_values(vec![
            Template::from("a"),
            Template::from("b"),
        ])),
        "count": 2
    });

    let out = to_string(doc).unwrap();
    assert_eq!(out, r#"{"rows":["a","b"],"count":2}"#);
}

#[test]
fn test_macro_trailing_commas() {
    let doc = template!({
        "a": 1,
        "b": [1, 2,],
    });
    assert_eq!(to_string(doc).unwrap(), r#"{"a":1,"b":[1,2]}"#);
}

#[test]
fn test_macro_empty_collections() {
    assert_eq!(to_string(template!([])).unwrap(), "[]");
    assert_eq!(to_string(template!({})).unwrap(), "{}");
}
