/// The single error kind raised by every constructor, parser and conversion.
///
/// Each variant names the cause; all of them mean the same thing to callers:
/// the requested color cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColorValue {
    #[error("{component} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        component: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("invalid hex value '{0}': expected two hexadecimal digits")]
    MalformedHex(String),

    #[error("invalid {format} color string: '{input}'")]
    MalformedString { format: &'static str, input: String },

    #[error("unrecognized color format: '{0}'")]
    UnrecognizedFormat(String),
}

impl InvalidColorValue {
    pub fn out_of_range(
        component: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            component,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn malformed_string(format: &'static str, input: &str) -> Self {
        Self::MalformedString {
            format,
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = InvalidColorValue::out_of_range("red", -5, 0, 255);
        assert_eq!(err.to_string(), "red = -5 is out of range [0, 255]");

        let err = InvalidColorValue::out_of_range("alpha", 1.5, 0.0, 1.0);
        assert_eq!(err.to_string(), "alpha = 1.5 is out of range [0, 1]");
    }

    #[test]
    fn malformed_hex_display() {
        let err = InvalidColorValue::MalformedHex("zz".into());
        assert_eq!(
            err.to_string(),
            "invalid hex value 'zz': expected two hexadecimal digits"
        );
    }

    #[test]
    fn malformed_string_display() {
        let err = InvalidColorValue::malformed_string("rgb", "rgb(55,155,255");
        assert_eq!(err.to_string(), "invalid rgb color string: 'rgb(55,155,255'");
    }

    #[test]
    fn unrecognized_format_display() {
        let err = InvalidColorValue::UnrecognizedFormat("cmyk(0,0,0,0)".into());
        assert_eq!(err.to_string(), "unrecognized color format: 'cmyk(0,0,0,0)'");
    }

    #[test]
    fn errors_compare_by_cause() {
        assert_eq!(
            InvalidColorValue::MalformedHex("g0".into()),
            InvalidColorValue::MalformedHex("g0".into())
        );
        assert_ne!(
            InvalidColorValue::MalformedHex("g0".into()),
            InvalidColorValue::UnrecognizedFormat("g0".into())
        );
    }
}
