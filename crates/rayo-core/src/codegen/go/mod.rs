// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Go source generation for Rayo.
//!
//! [`emit_module`] is a pure function of the module and a [`GenContext`]:
//! the same AST and context always produce byte-identical text. Generation
//! never fails on a well-formed AST — node kinds with no Go lowering render
//! as an explicit placeholder marker (`<lambda>`), so a partially supported
//! AST still yields best-effort output. Callers must treat placeholder
//! markers as compile errors in the generated program.
//!
//! Lowering decisions that are policy, not incident:
//!
//! - A module whose top level contains a `return` has its whole body wrapped
//!   in `func main()`, making the unit runnable.
//! - Any `print(..)` call anywhere in the module injects `import "fmt"` and
//!   lowers to `fmt.Println(..)`.
//! - An assignment to a bare name lowers to `name := value`
//!   (declare-and-initialize); assignments to index or attribute targets
//!   lower to plain `=`. Reassigning an already-declared bare name therefore
//!   re-declares it in the output.

mod expressions;
mod statements;

pub use expressions::emit_expression;
pub use statements::emit_statement;

use ecow::EcoString;

use crate::ast::{Expression, Module, Statement};
use crate::ast_walker::walk_module_expressions;

/// Mutable state for one generation run: target package name, collected
/// import paths, a counter for fresh temporary names, and the output buffer.
#[derive(Debug)]
pub struct GenContext {
    pub package_name: EcoString,
    pub imports: Vec<EcoString>,
    temp: usize,
    indent: usize,
    buffer: String,
}

impl GenContext {
    /// Creates a context targeting the given Go package.
    #[must_use]
    pub fn new(package_name: impl Into<EcoString>) -> Self {
        Self {
            package_name: package_name.into(),
            imports: Vec::new(),
            temp: 0,
            indent: 0,
            buffer: String::new(),
        }
    }

    /// Returns a fresh temporary variable name, unique within this context.
    pub fn fresh_temp(&mut self) -> String {
        self.temp += 1;
        format!("_tmp{}", self.temp)
    }

    /// Writes one line at the current indentation.
    pub(crate) fn push_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.buffer.push('\t');
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    pub(crate) fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    /// Emits a statement and returns just its text, leaving the buffer as it
    /// was before the call.
    pub(crate) fn statement_text(&mut self, stmt: &Statement) -> String {
        let start = self.buffer.len();
        emit_statement(stmt, self);
        self.buffer.split_off(start)
    }
}

/// Whether any expression in the module is a call to a callee literally
/// named `print`.
#[must_use]
pub fn contains_print(module: &Module) -> bool {
    let mut found = false;
    walk_module_expressions(module, &mut |expr| {
        if let Expression::Call { callee, .. } = expr {
            if callee.as_name().is_some_and(|name| name == "print") {
                found = true;
            }
        }
    });
    found
}

/// Emits a complete Go source file for one module: package header, import
/// directives (an injected `"fmt"` first if the module prints, then the
/// module's declared imports, deduplicated), then the top level.
pub fn emit_module(module: &Module, ctx: &mut GenContext) -> String {
    let header = format!("package {}", ctx.package_name);
    ctx.push_line(&header);
    ctx.push_line("");

    let mut paths: Vec<EcoString> = Vec::new();
    if contains_print(module) {
        paths.push(EcoString::from("fmt"));
    }
    for import in &module.imports {
        if !paths.contains(&import.path) {
            paths.push(import.path.clone());
        }
    }
    for path in &paths {
        ctx.push_line(&format!("import \"{path}\""));
    }
    if !paths.is_empty() {
        ctx.push_line("");
    }
    ctx.imports = paths;

    let chunks = emit_top_level(module, ctx);
    for chunk in chunks {
        ctx.buffer.push_str(&chunk);
    }
    std::mem::take(&mut ctx.buffer)
}

/// Emits the module's top-level statements, deciding entry-point wrapping:
/// if any top-level statement is a `return`, the entire body is wrapped in
/// one `func main()` and returned as a single chunk; otherwise each
/// statement becomes its own chunk.
///
/// The resolver reuses this so merged units make the same decision per
/// module that single-module generation does.
pub fn emit_top_level(module: &Module, ctx: &mut GenContext) -> Vec<String> {
    let has_return = module
        .body
        .iter()
        .any(|stmt| matches!(stmt, Statement::Return { .. }));

    if has_return {
        let start = ctx.buffer.len();
        ctx.push_line("func main() {");
        ctx.indented(|ctx| {
            for stmt in &module.body {
                emit_statement(stmt, ctx);
            }
        });
        ctx.push_line("}");
        vec![ctx.buffer.split_off(start)]
    } else {
        module
            .body
            .iter()
            .map(|stmt| ctx.statement_text(stmt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{lex_with_eof, parse};

    fn emit(source: &str) -> String {
        let (module, diagnostics) = parse(lex_with_eof(source));
        assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
        let mut ctx = GenContext::new("main");
        emit_module(&module, &mut ctx)
    }

    #[test]
    fn top_level_return_wraps_in_main() {
        let code = emit("var x = 42\nreturn x");
        assert!(code.contains("package main"));
        assert!(code.contains("func main() {"));
        assert!(code.contains("var x = 42"));
        assert!(code.contains("return x"));
    }

    #[test]
    fn no_return_means_no_main_wrapper() {
        let code = emit("var x = 42");
        assert!(!code.contains("func main()"));
        assert!(code.contains("var x = 42"));
    }

    #[test]
    fn print_call_injects_fmt_import() {
        let code = emit("print('hi')");
        assert!(code.contains("import \"fmt\""));
        assert!(code.contains("fmt.Println(\"hi\")"));
    }

    #[test]
    fn fmt_is_not_imported_twice() {
        let code = emit("import 'fmt'\nprint('hi')");
        assert_eq!(code.matches("import \"fmt\"").count(), 1);
    }

    #[test]
    fn declared_imports_are_emitted() {
        let code = emit("import 'strings'\nvar x = 1");
        assert!(code.contains("import \"strings\""));
    }

    #[test]
    fn bare_name_assignment_declares() {
        let code = emit("x = 1");
        assert!(code.contains("x := 1"));
    }

    #[test]
    fn index_assignment_is_plain() {
        let code = emit("xs[0] = 1");
        assert!(code.contains("xs[0] = 1"));
        assert!(!code.contains(":="));
    }

    #[test]
    fn if_elif_else_lowering() {
        let code = emit("if a { x = 1 } elif b { x = 2 } else { x = 3 }");
        assert!(code.contains("if a {"));
        assert!(code.contains("} else if b {"));
        assert!(code.contains("} else {"));
    }

    #[test]
    fn while_lowers_to_condition_for() {
        let code = emit("while x < 10 { x = x + 1 }");
        assert!(code.contains("for x < 10 {"));
    }

    #[test]
    fn for_lowers_to_range() {
        let code = emit("for item in items { print(item) }");
        assert!(code.contains("for _, item := range items {"));
    }

    #[test]
    fn try_lowers_to_deferred_recover() {
        let code = emit("try { x = 1 } except e { y = 2 } finally { z = 3 }");
        assert!(code.contains("func() {"));
        assert!(code.contains("defer func() {"));
        assert!(code.contains("recover()"));
        assert!(code.contains("}()"));
    }

    #[test]
    fn func_def_lowering() {
        let code = emit("def greet() { print('hi') }");
        assert!(code.contains("func greet() {"));
    }

    #[test]
    fn dict_and_list_literals() {
        let code = emit("var d = {'a': 1}\nvar l = [1, 2]");
        assert!(code.contains("map[string]any{\"a\": 1}"));
        assert!(code.contains("[]any{1, 2}"));
    }

    #[test]
    fn lambda_renders_placeholder() {
        // No Go lowering exists for lambdas; generation still succeeds with
        // an explicit marker rather than failing.
        let (module, _) = parse(lex_with_eof("var f = 1"));
        let mut module = module;
        if let Statement::VarDecl { value, .. } = &mut module.body[0] {
            *value = Expression::Lambda {
                params: Vec::new(),
                body: Box::new(Expression::Literal(
                    crate::ast::Literal::Int(1),
                    crate::source_analysis::Span::default(),
                )),
                span: crate::source_analysis::Span::default(),
            };
        }
        let mut ctx = GenContext::new("main");
        let code = emit_module(&module, &mut ctx);
        assert!(code.contains("<lambda>"));
    }

    #[test]
    fn output_is_deterministic() {
        let source = "import 'strings'\nvar x = 42\nif x < 50 { print(x) }\nreturn x";
        assert_eq!(emit(source), emit(source));
    }

    #[test]
    fn none_lowers_to_nil() {
        let code = emit("var x = None");
        assert!(code.contains("var x = nil"));
    }

    #[test]
    fn string_escaping() {
        let code = emit("var s = 'a\"b'");
        assert!(code.contains("var s = \"a\\\"b\""));
    }

    #[test]
    fn fresh_temps_are_unique() {
        let mut ctx = GenContext::new("main");
        assert_ne!(ctx.fresh_temp(), ctx.fresh_temp());
    }
}
