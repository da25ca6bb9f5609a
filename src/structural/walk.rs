//! The structural walk itself.

use serde_json::Value;

use super::Discrepancy;

/// Walk `template` against `actual` and return the first leaf discrepancy.
///
/// The walk is depth-first in template order: object members compare in the
/// order the template declares them, sequence elements by index. `None`
/// means the actual value reproduces every templated member.
#[must_use]
pub fn first_discrepancy(template: &Value, actual: &Value) -> Option<Discrepancy> {
    walk(template, actual, String::new())
}

fn walk(template: &Value, actual: &Value, path: String) -> Option<Discrepancy> {
    match (template, actual) {
        (Value::Object(t), Value::Object(a)) => {
            for (key, expected) in t {
                let member = member_path(&path, key);
                match a.get(key) {
                    Some(found) => {
                        if let Some(discrepancy) = walk(expected, found, member) {
                            return Some(discrepancy);
                        }
                    }
                    None => {
                        return Some(Discrepancy {
                            path: member,
                            expected: Some(expected.clone()),
                            actual: None,
                        })
                    }
                }
            }
            None
        }
        (Value::Array(t), Value::Array(a)) => {
            let longest = t.len().max(a.len());
            for i in 0..longest {
                let element = format!("{path}[{i}]");
                match (t.get(i), a.get(i)) {
                    (Some(expected), Some(found)) => {
                        if let Some(discrepancy) = walk(expected, found, element) {
                            return Some(discrepancy);
                        }
                    }
                    (Some(expected), None) => {
                        return Some(Discrepancy {
                            path: element,
                            expected: Some(expected.clone()),
                            actual: None,
                        })
                    }
                    (None, Some(found)) => {
                        return Some(Discrepancy {
                            path: element,
                            expected: None,
                            actual: Some(found.clone()),
                        })
                    }
                    (None, None) => unreachable!("index below the longer length"),
                }
            }
            None
        }
        (t, a) => {
            if leaf_eq(t, a) {
                None
            } else {
                Some(Discrepancy {
                    path,
                    expected: Some(t.clone()),
                    actual: Some(a.clone()),
                })
            }
        }
    }
}

fn member_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Leaf equality ignores declared numeric type differences.
fn leaf_eq(template: &Value, actual: &Value) -> bool {
    if let (Value::Number(t), Value::Number(a)) = (template, actual) {
        return t == a || t.as_f64() == a.as_f64();
    }
    template == actual
}
