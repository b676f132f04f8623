#[macro_export]
macro_rules! template {
    // Handle null
    (null) => {
        $crate::Template::Null
    };

    // Handle true
    (true) => {
        $crate::Template::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Template::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Template::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Template::Array(vec![$($crate::template!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Template::Object($crate::TemplateMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::TemplateMap::new();
        $(
            object.insert($key.to_string(), $crate::template!($value));
        )*
        $crate::Template::Object(object)
    }};

    // Embed a lazy region
    (lazy $region:expr) => {
        $crate::Template::Lazy($region)
    };

    // Unwrap parenthesized entries, e.g. (lazy ...) inside an object
    (($($inner:tt)+)) => {
        $crate::template!($($inner)+)
    };

    // Fallback for any expression
    ($s:expr) => {{
        $crate::to_template(&$s).unwrap_or($crate::Template::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{LazyRegion, Number, Template, TemplateMap};

    #[test]
    fn test_template_macro_primitives() {
        assert_eq!(template!(null), Template::Null);
        assert_eq!(template!(true), Template::Bool(true));
        assert_eq!(template!(false), Template::Bool(false));
        assert_eq!(template!(42), Template::Number(Number::Integer(42)));
        assert_eq!(template!(3.5), Template::Number(Number::Float(3.5)));
        assert_eq!(template!("hello"), Template::String("hello".to_string()));
    }

    #[test]
    fn test_template_macro_arrays() {
        assert_eq!(template!([]), Template::Array(vec![]));

        let arr = template!([1, 2, 3]);
        match arr {
            Template::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Template::Number(Number::Integer(1)));
                assert_eq!(vec[1], Template::Number(Number::Integer(2)));
                assert_eq!(vec[2], Template::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_template_macro_objects() {
        assert_eq!(template!({}), Template::Object(TemplateMap::new()));

        let obj = template!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Template::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&Template::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&Template::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_template_macro_lazy() {
        let doc = template!({
            "items": (lazy LazyRegion::from_values(vec![Template::from(1)]))
        });

        match doc {
            Template::Object(map) => assert!(map.get("items").is_some_and(Template::is_lazy)),
            _ => panic!("Expected object"),
        }
    }
}
