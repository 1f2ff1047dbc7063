use crate::interpreter::evaluator::core::Context;

impl Context {
    /// Resolves `{name}` interpolation markers in a string against the
    /// active scope chain.
    ///
    /// A marker is a `{`, one or more word characters, and a `}`. Markers
    /// whose name resolves are replaced with the value's display form; a
    /// marker whose name is unbound is left in the output exactly as written.
    /// That miss is silent on purpose — it is part of the language's humor,
    /// not an error. Braces that do not form a marker pass through untouched.
    ///
    /// # Parameters
    /// - `raw`: The string literal's contents, markers included.
    ///
    /// # Returns
    /// The rendered string.
    ///
    /// # Example
    /// ```
    /// use franzcode::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Integer(7));
    ///
    /// assert_eq!(context.interpolate("x is {x}"), "x is 7");
    /// assert_eq!(context.interpolate("y is {y}"), "y is {y}");
    /// assert_eq!(context.interpolate("{not a marker}"), "{not a marker}");
    /// ```
    #[must_use]
    pub fn interpolate(&self, raw: &str) -> String {
        let characters: Vec<char> = raw.chars().collect();
        let mut out = String::with_capacity(raw.len());

        let mut i = 0;
        while i < characters.len() {
            if characters[i] == '{' {
                let mut j = i + 1;
                while j < characters.len()
                      && (characters[j].is_ascii_alphanumeric() || characters[j] == '_')
                {
                    j += 1;
                }

                if j > i + 1 && j < characters.len() && characters[j] == '}' {
                    let name: String = characters[i + 1..j].iter().collect();
                    match self.get_variable(&name) {
                        Some(value) => out.push_str(&value.to_string()),
                        None => {
                            out.push('{');
                            out.push_str(&name);
                            out.push('}');
                        },
                    }
                    i = j + 1;
                    continue;
                }
            }

            out.push(characters[i]);
            i += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{evaluator::core::Context, value::core::Value};

    #[test]
    fn markers_resolve_through_the_scope_chain() {
        let mut context = Context::new();
        context.define_local("outer", Value::Str("o".to_string()));
        context.push_scope();
        context.define_local("inner", Value::Integer(1));

        assert_eq!(context.interpolate("{outer}{inner}"), "o1");
    }

    #[test]
    fn inner_scopes_shadow_for_interpolation() {
        let mut context = Context::new();
        context.define_local("x", Value::Integer(1));
        context.push_scope();
        context.define_local("x", Value::Integer(2));

        assert_eq!(context.interpolate("{x}"), "2");
    }

    #[test]
    fn whole_reals_interpolate_without_a_fractional_part() {
        let mut context = Context::new();
        context.define_local("x", Value::Real(7.0));

        assert_eq!(context.interpolate("x is {x}"), "x is 7");
    }

    #[test]
    fn adjacent_and_nested_braces_pass_through() {
        let context = Context::new();

        assert_eq!(context.interpolate("{}"), "{}");
        assert_eq!(context.interpolate("{{x}"), "{{x}");
    }
}
