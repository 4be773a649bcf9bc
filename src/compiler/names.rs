use std::collections::HashMap;

/// C++ identifiers of the bindings declared so far.
///
/// Every binding is written with a `v_` prefix, so a Vyrn name never collides
/// with a C++ keyword, `std` or a preamble symbol. A redeclared name gets a
/// fresh identifier (`v1_a`, `v2_a`, ...) and both declarations share the
/// body of `main`.
#[derive(Debug, Default, Clone)]
pub struct BindingNames {
    variables: HashMap<String, String>,
    constants: HashMap<String, String>,
    declarations: HashMap<String, usize>,
}

impl BindingNames {
    pub fn new() -> Self {
        BindingNames::default()
    }

    /// Allocates the identifier for a new declaration of `name`.
    pub fn declare(&mut self, name: &str, is_constant: bool) -> String {
        let count = self.declarations.entry(name.to_string()).or_insert(0);
        let emitted = if *count == 0 {
            format!("v_{}", name)
        } else {
            format!("v{}_{}", count, name)
        };
        *count += 1;

        let table = if is_constant {
            &mut self.constants
        } else {
            &mut self.variables
        };
        table.insert(name.to_string(), emitted.clone());

        emitted
    }

    /// The identifier a use of `name` reads: the latest variable, else the
    /// latest constant. Undeclared names still get the prefix and are left
    /// for the C++ compiler to reject.
    pub fn resolve(&self, name: &str) -> String {
        self.variables
            .get(name)
            .or_else(|| self.constants.get(name))
            .cloned()
            .unwrap_or_else(|| format!("v_{}", name))
    }
}
