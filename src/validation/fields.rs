//! Field-level checks shared by the request schemas.
//!
//! Numbers are accepted as JSON numbers or as numeric strings. Each check
//! returns the rejection message; the caller owns the field path.

use serde_json::{Map, Value};

use crate::scoring::Readings;
use crate::validation::error::Collector;

pub(crate) const REQUIRED: &str = "field required";
pub(crate) const EXPECTED_OBJECT: &str = "expected an object";

/// Join a parent path and a key.
pub(crate) fn path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Parse a finite number.
pub(crate) fn number(value: &Value) -> Result<f64, &'static str> {
    let parsed = match value {
        Value::Number(n) => n.as_f64().ok_or("expected a number")?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| "expected a number")?,
        _ => return Err("expected a number"),
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err("must be a finite number")
    }
}

/// Parse a whole number that is zero or greater.
pub(crate) fn non_negative_integer(value: &Value) -> Result<u64, &'static str> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Ok(v);
            }
            if n.as_i64().is_some() {
                return Err("must be greater than or equal to 0");
            }
            n.as_f64()
                .ok_or("expected an integer")
                .and_then(integral_float)
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(v) = s.parse::<u64>() {
                return Ok(v);
            }
            if s.parse::<i64>().is_ok() {
                return Err("must be greater than or equal to 0");
            }
            s.parse::<f64>()
                .map_err(|_| "expected an integer")
                .and_then(integral_float)
        }
        _ => Err("expected an integer"),
    }
}

fn integral_float(value: f64) -> Result<u64, &'static str> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err("must be an integer");
    }
    if value < 0.0 {
        return Err("must be greater than or equal to 0");
    }
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if value >= u64::MAX as f64 {
        return Err("is out of range");
    }
    Ok(value as u64)
}

/// A string that is not blank.
pub(crate) fn non_blank_string(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err("must not be empty"),
        Value::String(s) => Ok(s.clone()),
        _ => Err("expected a string"),
    }
}

/// Look up a required object field.
pub(crate) fn required_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
    errors: &mut Collector,
) -> Option<&'a Map<String, Value>> {
    match root.get(key) {
        None | Some(Value::Null) => {
            errors.push(key, REQUIRED);
            None
        }
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            errors.push(key, EXPECTED_OBJECT);
            None
        }
    }
}

/// Look up an optional object field; absent and `null` are both "not given".
pub(crate) fn optional_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
    errors: &mut Collector,
) -> Option<&'a Map<String, Value>> {
    match root.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            errors.push(key, EXPECTED_OBJECT);
            None
        }
    }
}

/// Convert every entry of a name → number mapping, reporting each bad entry.
pub(crate) fn readings(map: &Map<String, Value>, parent: &str, errors: &mut Collector) -> Readings {
    // Map keys are already unique.
    let mut readings = Readings::with_capacity(map.len());
    for (name, value) in map {
        match number(value) {
            Ok(v) => readings.push_unique(name.as_str(), v),
            Err(message) => errors.push(path(parent, name), message),
        }
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        assert_eq!(number(&json!(3)), Ok(3.0));
        assert_eq!(number(&json!(-2.5)), Ok(-2.5));
        assert_eq!(number(&json!(" 4.25 ")), Ok(4.25));
    }

    #[test]
    fn test_number_rejects_other_types() {
        assert_eq!(number(&json!(true)), Err("expected a number"));
        assert_eq!(number(&json!(null)), Err("expected a number"));
        assert_eq!(number(&json!([1])), Err("expected a number"));
        assert_eq!(number(&json!("abc")), Err("expected a number"));
        assert_eq!(number(&json!("NaN")), Err("must be a finite number"));
        assert_eq!(number(&json!("inf")), Err("must be a finite number"));
    }

    #[test]
    fn test_non_negative_integer() {
        assert_eq!(non_negative_integer(&json!(30)), Ok(30));
        assert_eq!(non_negative_integer(&json!(0)), Ok(0));
        assert_eq!(non_negative_integer(&json!(30.0)), Ok(30));
        assert_eq!(non_negative_integer(&json!("12")), Ok(12));
        assert_eq!(
            non_negative_integer(&json!(-1)),
            Err("must be greater than or equal to 0")
        );
        assert_eq!(
            non_negative_integer(&json!(-3.0)),
            Err("must be greater than or equal to 0")
        );
        assert_eq!(non_negative_integer(&json!(1.5)), Err("must be an integer"));
        assert_eq!(non_negative_integer(&json!("1.5")), Err("must be an integer"));
        assert_eq!(non_negative_integer(&json!(1e30)), Err("is out of range"));
        assert_eq!(non_negative_integer(&json!("ten")), Err("expected an integer"));
        assert_eq!(non_negative_integer(&json!(false)), Err("expected an integer"));
    }

    #[test]
    fn test_non_blank_string() {
        assert_eq!(non_blank_string(&json!("Artemis")), Ok("Artemis".to_string()));
        assert_eq!(non_blank_string(&json!("   ")), Err("must not be empty"));
        assert_eq!(non_blank_string(&json!(5)), Err("expected a string"));
    }

    #[test]
    fn test_readings_report_every_bad_entry() {
        let map = json!({"a": 1, "b": "x", "c": 2, "d": null});
        let mut errors = Collector::default();
        let readings = readings(map.as_object().unwrap(), "biomarkers", &mut errors);

        assert_eq!(readings.len(), 2);
        let failure = errors.finish(|| ()).unwrap_err();
        let fields: Vec<_> = failure.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["biomarkers.b", "biomarkers.d"]);
    }

    #[test]
    fn test_large_reading_maps_convert_in_linear_time() {
        let map: Map<String, Value> = (0..200_000).map(|i| (format!("k{i}"), json!(1))).collect();
        let mut errors = Collector::default();

        let start = std::time::Instant::now();
        let readings = readings(&map, "biomarkers", &mut errors);

        assert!(start.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(readings.len(), 200_000);
        assert_eq!(readings.iter().next(), Some(("k0", 1.0)));
        assert_eq!(readings.iter().last(), Some(("k199999", 1.0)));
        assert!(errors.finish(|| ()).is_ok());
    }
}
