//! Common types and traits shared across the query builders

use crate::{wire, Value};

/// Core trait for anything that compiles into a wire envelope.
///
/// Compilation is total: every descriptor was validated at construction
/// time, so producing the envelope cannot fail. It is also pure and
/// idempotent; compiling the same descriptor twice yields structurally
/// identical envelopes.
pub trait CompileQuery {
    /// Compile this descriptor into its wire envelope
    fn compile(&self) -> wire::Query;
}

/// Trait for the positional-argument lists accepted by the query factories.
///
/// Call sites are ergonomic Rust (string literals, tuples for optional
/// trailing arguments) but the validators operate on a uniform positional
/// list, the same shape a dynamic binding layer would hand over. Passing a
/// `Vec<Value>` or `&[Value]` is that dynamic path: it is the one place a
/// zero-argument or wrongly-typed call is representable, and it fails with
/// the same arity/type errors.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Value>;
}

/// No arguments
impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoArgs for Value {
    fn into_args(self) -> Vec<Value> {
        vec![self]
    }
}

impl IntoArgs for &str {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for String {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for &String {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for bool {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for i32 {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for i64 {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoArgs for f64 {
    fn into_args(self) -> Vec<Value> {
        vec![self.into()]
    }
}

// Two positional arguments: create(("users", "uid"))
impl<A, B> IntoArgs for (A, B)
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn into_args(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into()]
    }
}

impl IntoArgs for Vec<Value> {
    fn into_args(self) -> Vec<Value> {
        self
    }
}

impl IntoArgs for &[Value] {
    fn into_args(self) -> Vec<Value> {
        self.to_vec()
    }
}
