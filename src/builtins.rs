use crate::object::{EvalError, Object, Result};
use lazy_static::lazy_static;
use rand::Rng;
use std::collections::HashMap;

pub type Builtin = fn(Vec<Object>) -> Result<Object>;

/// Native function table handed to the evaluator. A value rather than
/// process-wide state, so independent runs cannot interfere; environment
/// bindings shadow entries in it.
#[derive(Clone)]
pub struct Builtins {
    functions: HashMap<&'static str, Builtin>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self {
            functions: DEFAULT_BUILTINS.clone(),
        }
    }
}

impl Builtins {
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        self.functions.get(name).map(|func| Object::Builtin(*func))
    }

    pub fn register(&mut self, name: &'static str, func: Builtin) {
        self.functions.insert(name, func);
    }
}

lazy_static! {
    static ref DEFAULT_BUILTINS: HashMap<&'static str, Builtin> = vec![
        ("len", len as Builtin),
        ("Atoi", atoi as Builtin),
        ("first", first as Builtin),
        ("last", last as Builtin),
        ("rest", rest as Builtin),
        ("push", push as Builtin),
        ("randInt", rand_int as Builtin),
        ("randPick", rand_pick as Builtin),
        ("sort", sort as Builtin),
    ]
    .into_iter()
    .collect();
}

fn builtin_error(message: String) -> EvalError {
    EvalError::Builtin { message }
}

fn len(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile Error: len() function can only have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(Object::Integer(a.borrow().len() as i64)),
        Object::String(s) => Ok(Object::Integer(s.len() as i64)),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "len",
            type_name: obj.type_name(),
        }),
    }
}

fn atoi(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile Error: `Atoi` function can only have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::String(s) => match s.parse::<i64>() {
            Ok(n) => Ok(Object::Integer(n)),
            Err(err) => Err(builtin_error(format!(
                "Error Parsing string to int64: {}",
                err
            ))),
        },
        obj => Err(builtin_error(format!(
            "Compile Error: Argument to `Atoi` must be a STRING, got {}",
            obj.type_name()
        ))),
    }
}

fn first(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile error: `first` function can only have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(a.borrow().first().cloned().unwrap_or(Object::Null)),
        Object::String(s) => Ok(match s.get(0..1) {
            Some(c) => Object::from(c),
            None => Object::Null,
        }),
        obj => Err(builtin_error(format!(
            "argument to `first` must be ARRAY or STRING, got {}",
            obj.type_name()
        ))),
    }
}

fn last(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile error: `last` function can only have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => Ok(a.borrow().last().cloned().unwrap_or(Object::Null)),
        obj => Err(builtin_error(format!(
            "argument to `last` must be ARRAY, got {}",
            obj.type_name()
        ))),
    }
}

fn rest(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile error: `rest` function can only have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => {
            let elements = a.borrow();
            if elements.is_empty() {
                Ok(Object::Null)
            } else {
                Ok(Object::from(elements[1..].to_vec()))
            }
        }
        obj => Err(builtin_error(format!(
            "argument to `rest` must be ARRAY, got {}",
            obj.type_name()
        ))),
    }
}

fn push(args: Vec<Object>) -> Result<Object> {
    if args.len() != 2 {
        return Err(builtin_error(
            "Compile error: `push` function must have 2 arguments".to_owned(),
        ));
    }

    let mut args = args.into_iter();
    match (args.next().unwrap(), args.next().unwrap()) {
        (Object::Array(a), value) => {
            // In-place append: visible through every alias of the array.
            a.borrow_mut().push(value);
            Ok(Object::Array(a))
        }
        (obj, _) => Err(builtin_error(format!(
            "argument to `push` must be ARRAY, got {}",
            obj.type_name()
        ))),
    }
}

fn rand_int(args: Vec<Object>) -> Result<Object> {
    if args.len() != 2 {
        return Err(builtin_error(
            "Compile error: `randInt` function must have 2 arguments".to_owned(),
        ));
    }

    let mut args = args.into_iter();
    match (args.next().unwrap(), args.next().unwrap()) {
        (Object::Integer(min), Object::Integer(max)) => {
            if min >= max {
                return Err(builtin_error(
                    "min value must be less than max value".to_owned(),
                ));
            }
            Ok(Object::Integer(rand::thread_rng().gen_range(min..=max)))
        }
        (left, right) => Err(builtin_error(format!(
            "arguments to `random` must be INTEGER, got {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn rand_pick(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile error: `randomElement` function must have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => {
            let elements = a.borrow();
            if elements.is_empty() {
                return Ok(Object::Null);
            }
            let index = rand::thread_rng().gen_range(0..elements.len());
            Ok(elements[index].clone())
        }
        obj => Err(builtin_error(format!(
            "argument to `randomElement` must be ARRAY, got {}",
            obj.type_name()
        ))),
    }
}

fn sort(args: Vec<Object>) -> Result<Object> {
    if args.len() != 1 {
        return Err(builtin_error(
            "Compile Error: `sort` function must have 1 argument".to_owned(),
        ));
    }

    match args.into_iter().next().unwrap() {
        Object::Array(a) => {
            {
                let mut elements = a.borrow_mut();
                for element in elements.iter() {
                    match element {
                        Object::Integer(_) | Object::String(_) => {}
                        other => {
                            return Err(builtin_error(format!(
                                "elements in the array must be INTEGER or STRING, got {}",
                                other.type_name()
                            )))
                        }
                    }
                }

                // In-place sort; mixed integer/string elements keep their
                // relative order.
                elements.sort_by(|left, right| match (left, right) {
                    (Object::Integer(x), Object::Integer(y)) => x.cmp(y),
                    (Object::String(x), Object::String(y)) => x.cmp(y),
                    _ => std::cmp::Ordering::Equal,
                });
            }
            Ok(Object::Array(a))
        }
        obj => Err(builtin_error(format!(
            "argument to `sort` must be ARRAY, got {}",
            obj.type_name()
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn int_array(values: &[i64]) -> Object {
        Object::from(values.iter().cloned().map(Object::Integer).collect::<Vec<_>>())
    }

    #[test]
    fn test_len() {
        assert_eq!(len(vec![Object::from("four")]), Ok(Object::Integer(4)));
        assert_eq!(len(vec![int_array(&[1, 2, 3])]), Ok(Object::Integer(3)));
        assert_eq!(
            len(vec![Object::Integer(1)]),
            Err(EvalError::UnsupportedArgType {
                fn_name: "len",
                type_name: "INTEGER"
            })
        );
        assert_eq!(
            len(vec![]).unwrap_err().to_string(),
            "Compile Error: len() function can only have 1 argument"
        );
    }

    #[test]
    fn test_atoi() {
        assert_eq!(atoi(vec![Object::from("42")]), Ok(Object::Integer(42)));
        assert_eq!(atoi(vec![Object::from("-7")]), Ok(Object::Integer(-7)));
        assert!(atoi(vec![Object::from("four")]).is_err());
        assert_eq!(
            atoi(vec![Object::Integer(4)]).unwrap_err().to_string(),
            "Compile Error: Argument to `Atoi` must be a STRING, got INTEGER"
        );
    }

    #[test]
    fn test_first_last_rest() {
        assert_eq!(first(vec![int_array(&[1, 2, 3])]), Ok(Object::Integer(1)));
        assert_eq!(first(vec![int_array(&[])]), Ok(Object::Null));
        assert_eq!(first(vec![Object::from("abc")]), Ok(Object::from("a")));
        assert_eq!(first(vec![Object::from("")]), Ok(Object::Null));

        assert_eq!(last(vec![int_array(&[1, 2, 3])]), Ok(Object::Integer(3)));
        assert_eq!(last(vec![int_array(&[])]), Ok(Object::Null));

        assert_eq!(rest(vec![int_array(&[1, 2, 3])]), Ok(int_array(&[2, 3])));
        assert_eq!(rest(vec![int_array(&[1])]), Ok(int_array(&[])));
        assert_eq!(rest(vec![int_array(&[])]), Ok(Object::Null));
    }

    #[test]
    fn test_push_mutates_in_place() {
        let array = int_array(&[1, 2]);
        let result = push(vec![array.clone(), Object::Integer(3)]).unwrap();

        assert_eq!(result, int_array(&[1, 2, 3]));
        // The input array aliases the result.
        assert_eq!(array, int_array(&[1, 2, 3]));
    }

    #[test]
    fn test_sort() {
        let array = int_array(&[3, 1, 2]);
        assert_eq!(sort(vec![array.clone()]), Ok(int_array(&[1, 2, 3])));
        assert_eq!(array, int_array(&[1, 2, 3]));

        let strings = Object::from(vec![Object::from("b"), Object::from("a")]);
        assert_eq!(
            sort(vec![strings]),
            Ok(Object::from(vec![Object::from("a"), Object::from("b")]))
        );

        assert_eq!(
            sort(vec![Object::from(vec![Object::Null])])
                .unwrap_err()
                .to_string(),
            "elements in the array must be INTEGER or STRING, got NULL"
        );
    }

    #[test]
    fn test_rand_int_bounds() {
        for _ in 0..20 {
            match rand_int(vec![Object::Integer(1), Object::Integer(3)]).unwrap() {
                Object::Integer(n) => assert!((1..=3).contains(&n)),
                other => panic!("expected integer, got {}", other),
            }
        }
        assert_eq!(
            rand_int(vec![Object::Integer(3), Object::Integer(1)])
                .unwrap_err()
                .to_string(),
            "min value must be less than max value"
        );
    }

    #[test]
    fn test_rand_pick() {
        assert_eq!(rand_pick(vec![int_array(&[])]), Ok(Object::Null));
        assert_eq!(rand_pick(vec![int_array(&[5])]), Ok(Object::Integer(5)));
    }

    #[test]
    fn test_registry_lookup() {
        let builtins = Builtins::default();
        assert!(builtins.get("len").is_some());
        assert!(builtins.get("missing").is_none());
        assert!(Builtins::empty().get("len").is_none());
    }
}
