//! Faux Apex class rendering.
//!
//! Produces the text of one `.cls` stub per described SObject. The output
//! is deliberately minimal: a header comment, one `global` field per
//! describe field, and a no-arg constructor. The Apex Language Server only
//! needs the declarations for completion, nothing here has to execute.
//!
//! Rendering is deterministic: the same [`SObjectDescribe`] always yields
//! byte-identical output, and fields appear in the order the describe call
//! returned them.

use crate::schema::{FieldDescribe, SObjectDescribe};
use crate::typemap::apex_type;

/// Renders one field declaration, preceded by a label comment when the
/// field has a label.
fn render_field(field: &FieldDescribe) -> String {
    let apex = apex_type(&field.field_type, &field.reference_to);
    match field.label.as_deref().filter(|l| !l.is_empty()) {
        Some(label) => format!("    // {label}\n    global {apex} {name};", name = field.name),
        None => format!("    global {apex} {name};", name = field.name),
    }
}

/// Renders the complete faux Apex class for one described SObject.
pub fn render_class(describe: &SObjectDescribe) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(describe.fields.len() + 8);

    lines.push("// This file is generated as an Apex representation of the".to_string());
    lines.push(format!("//     {}", describe.label));
    lines.push("// standard object in your org.".to_string());
    lines.push("// This file is used for language services by the Apex Language Server.".to_string());
    lines.push(String::new());
    lines.push(format!("global class {} {{", describe.name));

    for field in &describe.fields {
        lines.push(render_field(field));
    }

    lines.push(String::new());
    lines.push(format!("    global {}() {{ }}", describe.name));
    lines.push("}".to_string());

    lines.join("\n")
}
