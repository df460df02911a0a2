use super::Value;

/// Safely drops `value` in heap memory.
///
/// This avoids stack overflows with deeply nested types.
pub fn safely(value: Value) {
    match value {
        Value::Array(..) | Value::Object(..) | Value::Variant(..) | Value::Complex(..) => {}
        _ => return,
    }

    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(list) => stack.extend(list),
            Value::Object(obj) => stack.extend(obj.into_iter().map(|(_, child)| child)),
            Value::Variant(mut variant) => stack.push(variant.take_value()),
            Value::Complex(mut complex) => {
                let (real, imag) = complex.take_parts();
                stack.push(real);
                stack.push(imag);
            }
            _ => (),
        }
    }
}
