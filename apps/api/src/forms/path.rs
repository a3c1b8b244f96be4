use crate::forms::FormError;

/// A parsed draft field address: `field` or `list.index.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    Field(&'a str),
    Row {
        list: &'a str,
        index: usize,
        field: &'a str,
    },
}

impl<'a> FieldPath<'a> {
    pub fn parse(path: &'a str) -> Result<Self, FormError> {
        let unknown = || FormError::UnknownField(path.to_string());
        let parts: Vec<&str> = path.split('.').collect();
        match parts.as_slice() {
            [field] if !field.is_empty() => Ok(FieldPath::Field(*field)),
            [list, index, field] if !list.is_empty() && !field.is_empty() => {
                let index = parse_index(index).ok_or_else(unknown)?;
                Ok(FieldPath::Row {
                    list: *list,
                    index,
                    field: *field,
                })
            }
            _ => Err(unknown()),
        }
    }
}

/// Row indices are plain decimal with no sign or leading zeros, so each row
/// has exactly one spelling and error paths match edit paths.
fn parse_index(s: &str) -> Option<usize> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_field() {
        assert_eq!(FieldPath::parse("fullName"), Ok(FieldPath::Field("fullName")));
    }

    #[test]
    fn test_parse_row_field() {
        assert_eq!(
            FieldPath::parse("experiences.2.startDate"),
            Ok(FieldPath::Row {
                list: "experiences",
                index: 2,
                field: "startDate"
            })
        );
    }

    #[test]
    fn test_parse_zero_and_multi_digit_indices() {
        for (path, expected) in [("a.0.b", 0), ("a.10.b", 10)] {
            assert!(matches!(
                FieldPath::parse(path),
                Ok(FieldPath::Row { index, .. }) if index == expected
            ));
        }
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for bad in [
            "", "a.b", "a.x.c", "a.1.", ".1.c", "a.1.b.c", "a.-1.b", "a.+0.b", "a.00.b", "a.01.b",
            "a. 1.b",
        ] {
            assert!(FieldPath::parse(bad).is_err(), "{bad} should not parse");
        }
    }
}
