//! Dump command - projects a scene document and prints it as JSON.

use serde_json::json;

use usdj_am::{
    Assignment, Descriptor, Document, Number, ObjectDeclarationList, ObjectDeclarationListValue,
    ReferenceFile, Value, Visitor,
};

use crate::cli::DumpArgs;

/// Run the dump command
pub fn run(args: &DumpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::load(&args.file)?;
    let root = Descriptor::new(document.automerge(), document.root())?;

    let mut builder = JsonBuilder::default();
    root.accept(&mut builder)?;
    let scene = builder.pop();

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        println!("{}", serde_json::to_string(&scene)?);
    }
    Ok(())
}

/// Rebuilds the JSON form of a scene by walking its projection.
///
/// Every visit pushes exactly one JSON value; composite nodes pop their
/// children back off the stack as they assemble themselves.
#[derive(Debug, Default)]
struct JsonBuilder {
    stack: Vec<serde_json::Value>,
}

fn number_json(number: Number) -> serde_json::Value {
    match number {
        Number::Int(int) => json!(int),
        Number::Uint(uint) => json!(uint),
        Number::Float(float) => json!(float),
    }
}

impl JsonBuilder {
    fn pop(&mut self) -> serde_json::Value {
        self.stack.pop().expect("Every visit pushes one value")
    }

    fn value_json(&mut self, value: &Value<'_>) -> usdj_am::Result<serde_json::Value> {
        match value {
            Value::Bool(b) => Ok(json!(b)),
            Value::Number(number) => Ok(number_json(*number)),
            Value::String(text) => Ok(json!(text)),
            Value::Values(values) => {
                let mut elements = Vec::with_capacity(values.len());
                for element in values {
                    elements.push(self.value_json(&element?)?);
                }
                Ok(serde_json::Value::Array(elements))
            }
            Value::ReferenceFile(reference) => {
                reference.accept(self)?;
                Ok(self.pop())
            }
        }
    }
}

impl<'a> Visitor<'a> for JsonBuilder {
    fn visit_assignment(&mut self, node: &Assignment<'a>) -> usdj_am::Result<()> {
        let keyword = node.get_keyword()?.map(|keyword| keyword.as_str());
        let identifier = node.get_identifier()?;
        let value = node.get_value()?;
        let value = self.value_json(&value)?;
        self.stack.push(json!({
            "type": node.get_type().as_str(),
            "keyword": keyword,
            "identifier": identifier,
            "value": value,
        }));
        Ok(())
    }

    fn visit_descriptor(&mut self, node: &Descriptor<'a>) -> usdj_am::Result<()> {
        let description = node.get_description()?;
        let mut assignments = Vec::new();
        for assignment in &node.get_assignments()? {
            assignment?.accept(self)?;
            assignments.push(self.pop());
        }
        self.stack.push(json!({
            "description": description,
            "assignments": assignments,
        }));
        Ok(())
    }

    fn visit_object_declaration_list(
        &mut self,
        node: &ObjectDeclarationList<'a>,
    ) -> usdj_am::Result<()> {
        let mut values = Vec::new();
        for entry in &node.get_values()? {
            entry?.accept(self)?;
            values.push(self.pop());
        }
        self.stack.push(json!({
            "type": node.get_type().as_str(),
            "values": values,
        }));
        Ok(())
    }

    fn visit_object_declaration_list_value(
        &mut self,
        node: &ObjectDeclarationListValue<'a>,
    ) -> usdj_am::Result<()> {
        let index = number_json(node.get_index()?);
        let value = node.get_value()?;
        let value = self.value_json(&value)?;
        self.stack.push(json!({
            "index": index,
            "value": value,
        }));
        Ok(())
    }

    fn visit_reference_file(&mut self, node: &ReferenceFile<'a>) -> usdj_am::Result<()> {
        let src = node.get_src()?;
        let descriptor = match node.get_descriptor()? {
            Some(descriptor) => {
                descriptor.accept(self)?;
                self.pop()
            }
            None => serde_json::Value::Null,
        };
        self.stack.push(json!({
            "type": node.get_type().as_str(),
            "src": src,
            "descriptor": descriptor,
        }));
        Ok(())
    }
}
