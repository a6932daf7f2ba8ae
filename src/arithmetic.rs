use std::ops::Add;

pub fn add<T: Add>(a: T, b: T) -> T::Output {
    a + b
}
