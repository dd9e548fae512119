//! Integration tests for the public API.
//!
//! These drive `List` and `ByteStr` only through their public surface and
//! check the documented laws against `Vec` and `String` as reference models.

use pdt_core::{ByteStr, Error, List};
use pretty_assertions::assert_eq;

/// Small deterministic generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

fn check_invariants(list: &List<i64>, model: &[i64]) {
    assert!(list.len() <= list.capacity());
    assert_eq!(list.as_slice(), model);
}

#[test]
fn test_list_against_vec_model() {
    let mut rng = Lcg(0x5eed);
    let mut list = List::new();
    let mut model: Vec<i64> = Vec::new();

    for step in 0..5_000 {
        let value = rng.below(16) as i64;
        match rng.below(9) {
            0 | 1 => {
                list.append(value);
                model.push(value);
            }
            2 => {
                let index = rng.below(model.len() + 2);
                let result = list.insert(value, index);
                if index <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.insert(index, value);
                } else {
                    assert_eq!(
                        result,
                        Err(Error::IndexOutOfRange {
                            index,
                            len: model.len()
                        })
                    );
                }
            }
            3 => assert_eq!(list.pop(), model.pop()),
            4 => {
                let index = rng.below(model.len() + 1);
                let result = list.pop_at(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            5 => {
                let removed = list.remove(&value);
                match model.iter().position(|v| *v == value) {
                    Some(index) => assert_eq!(removed, Some(model.remove(index))),
                    None => assert_eq!(removed, None),
                }
            }
            6 => {
                let other: List<i64> = (0..rng.below(5) as i64).collect();
                list.extend_from_list(&other);
                model.extend(other.iter().copied());
            }
            7 => {
                list.reverse();
                model.reverse();
            }
            _ => {
                assert_eq!(
                    list.count(&value),
                    model.iter().filter(|v| **v == value).count()
                );
            }
        }
        check_invariants(&list, &model);

        if step % 1000 == 999 {
            list.clear();
            model.clear();
            assert_eq!(list.capacity(), 0);
        }
    }
}

#[test]
fn test_list_scenarios() {
    let mut c = List::new();
    c.append(1);
    c.append(2);
    c.append(3);
    assert_eq!(c.len(), 3);
    assert_eq!(c.pop_at(1), Ok(2));
    assert_eq!(c, [1, 3]);

    let mut c = List::from([1, 2, 3]);
    c.remove(&2);
    assert_eq!(c, [1, 3]);
    c.remove(&99);
    assert_eq!(c, [1, 3]);

    let mut c = List::from([1, 2, 3]);
    c.reverse();
    assert_eq!(c, [3, 2, 1]);
}

#[test]
fn test_list_of_byte_strings() {
    let mut words: List<ByteStr> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(ByteStr::from)
        .collect();
    words.insert(ByteStr::from("first"), 0).unwrap();
    words[1] = words[1].upper();

    assert_eq!(words.count(&ByteStr::from("beta")), 1);
    assert_eq!(
        words.to_string(),
        r#"{"first", "ALPHA", "beta", "gamma"}"#
    );

    let joined = words
        .iter()
        .fold(ByteStr::new(), |acc, word| acc + word);
    assert_eq!(joined, "firstALPHAbetagamma");
}

#[test]
fn test_byte_str_laws() {
    let samples = ["", "a", "Hello", "MiXeD case 42", "tail"];
    for left in samples {
        let a = ByteStr::from(left);
        assert_eq!(a.upper().upper(), a.upper());
        assert_eq!(a.lower().lower(), a.lower());
        assert_eq!(a.upper(), left.to_ascii_uppercase().as_str());
        for right in samples {
            let b = ByteStr::from(right);
            assert_eq!((&a + &b).len(), a.len() + b.len());
            assert_eq!(a == b, left == right);
        }
    }
}

#[test]
fn test_byte_str_replace_matches_std() {
    let cases = [
        ("aXbXc", "X", "-"),
        ("aXbXc", "X", "<>"),
        ("XXXX", "XX", "y"),
        ("no match here", "zz", "!"),
        ("ends with X", "X", "a long replacement"),
        ("", "X", "-"),
    ];
    for (text, old, new) in cases {
        let replaced = ByteStr::from(text).replace(old, new);
        assert_eq!(replaced, text.replace(old, new).as_str(), "{text:?}");
    }
}

#[test]
fn test_errors_render() {
    let err = List::<u8>::new().pop_at(0).unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range for length 0");

    let err = ByteStr::from("abc").substr(1, 5).unwrap_err();
    assert_eq!(err.to_string(), "range 1..1+5 out of bounds for length 3");
}
