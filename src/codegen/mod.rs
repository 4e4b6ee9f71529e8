//! Build-time code generation surface
//!
//! This module holds the pieces of the host framework the component
//! integrations emit against: generated-variable expressions, emitted
//! statements, and the object registry used to resolve identifier
//! references between components.

mod expr;
mod registry;

pub use expr::{Arg, Expr, Ident, InvalidIdent, ObjectClass, Stmt};
pub use registry::{Registry, ResolveError};

use std::collections::HashMap;
use std::sync::Mutex;

/// One code-generation run: the object registry plus the ordered list of
/// emitted statements.
///
/// Generation tasks run sequentially under the host scheduler, but they
/// share the run through `&self`, so the mutable parts sit behind locks.
pub struct Codegen {
    registry: Registry,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    stmts: Vec<Stmt>,
    ident_seq: HashMap<String, u32>,
}

impl Codegen {
    pub fn new() -> Self {
        Codegen {
            registry: Registry::new(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append one statement to the generated output.
    pub fn add(&self, stmt: Stmt) {
        log::trace!("emit: {}", stmt);
        self.state.lock().unwrap().stmts.push(stmt);
    }

    /// Hand out a fresh identifier with the given prefix.
    ///
    /// The per-prefix counter is part of the run, so repeated runs over
    /// the same input allocate the same sequence of identifiers.
    pub fn new_ident(&self, prefix: &str) -> Ident {
        let mut state = self.state.lock().unwrap();
        let seq = state.ident_seq.entry(prefix.to_string()).or_insert(0);
        *seq += 1;
        Ident::generated(prefix, *seq)
    }

    /// Snapshot of the statements emitted so far, in emission order.
    pub fn statements(&self) -> Vec<Stmt> {
        self.state.lock().unwrap().stmts.clone()
    }

    /// Render the emitted statements as source lines for the host build.
    pub fn render(&self) -> String {
        let state = self.state.lock().unwrap();
        let mut out = String::new();
        for stmt in &state.stmts {
            out.push_str(&stmt.to_string());
            out.push('\n');
        }
        out
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Codegen::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_idents_are_sequential_per_prefix() {
        let cg = Codegen::new();
        assert_eq!(cg.new_ident("text_sensor").as_str(), "text_sensor_1");
        assert_eq!(cg.new_ident("text_sensor").as_str(), "text_sensor_2");
        assert_eq!(cg.new_ident("other").as_str(), "other_1");
    }

    #[test]
    fn test_statements_keep_emission_order() {
        let cg = Codegen::new();
        let target = cg.new_ident("dev");
        cg.add(Stmt::method_call_on(target.clone(), "set_name", vec![Arg::from("a")]));
        cg.add(Stmt::method_call_on(target, "set_icon", vec![Arg::from("b")]));

        let stmts = cg.statements();
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].calls("set_name"));
        assert!(stmts[1].calls("set_icon"));
    }
}
