//! Import command - builds an Automerge scene document from a JSON file.

use automerge::{Automerge, ObjId, ObjType, ROOT, ScalarValue, transaction::Transactable};

use usdj_am::{Descriptor, Document};

use crate::cli::ImportArgs;

/// Run the import command
pub fn run(args: &ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.json)?;
    let scene: serde_json::Value = serde_json::from_str(&text)?;

    let serde_json::Value::Object(fields) = &scene else {
        return Err("The scene root must be a JSON object".into());
    };

    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    for (key, value) in fields {
        put_json(&mut tx, &ROOT, key, value)?;
    }
    tx.commit();

    // Confirm the imported data projects as a scene before writing it out.
    let root = Descriptor::new(&doc, ROOT)?;
    let assignments = root.get_assignments()?.len();

    let mut document = Document::from(doc);
    document.save(&args.file)?;

    tracing::info!(file = %args.file.display(), assignments, "Imported scene document");
    println!(
        "Imported {} into {} ({} assignments)",
        args.json.display(),
        args.file.display(),
        assignments
    );
    Ok(())
}

/// Writes `value` under `obj[key]`, recursing through containers.
fn put_json<T: Transactable>(
    tx: &mut T,
    obj: &ObjId,
    key: &str,
    value: &serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match value {
        serde_json::Value::Null => {
            tx.put(obj, key, ScalarValue::Null)?;
        }
        serde_json::Value::Bool(b) => {
            tx.put(obj, key, *b)?;
        }
        serde_json::Value::Number(number) => {
            tx.put(obj, key, scalar_number(number)?)?;
        }
        serde_json::Value::String(text) => {
            tx.put(obj, key, text.as_str())?;
        }
        serde_json::Value::Array(elements) => {
            let list = tx.put_object(obj, key, ObjType::List)?;
            for (index, element) in elements.iter().enumerate() {
                insert_json(tx, &list, index, element)?;
            }
        }
        serde_json::Value::Object(fields) => {
            let map = tx.put_object(obj, key, ObjType::Map)?;
            for (nested_key, nested) in fields {
                put_json(tx, &map, nested_key, nested)?;
            }
        }
    }
    Ok(())
}

/// Inserts `value` at `list[index]`, recursing through containers.
fn insert_json<T: Transactable>(
    tx: &mut T,
    list: &ObjId,
    index: usize,
    value: &serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match value {
        serde_json::Value::Null => {
            tx.insert(list, index, ScalarValue::Null)?;
        }
        serde_json::Value::Bool(b) => {
            tx.insert(list, index, *b)?;
        }
        serde_json::Value::Number(number) => {
            tx.insert(list, index, scalar_number(number)?)?;
        }
        serde_json::Value::String(text) => {
            tx.insert(list, index, text.as_str())?;
        }
        serde_json::Value::Array(elements) => {
            let nested = tx.insert_object(list, index, ObjType::List)?;
            for (nested_index, element) in elements.iter().enumerate() {
                insert_json(tx, &nested, nested_index, element)?;
            }
        }
        serde_json::Value::Object(fields) => {
            let map = tx.insert_object(list, index, ObjType::Map)?;
            for (key, nested) in fields {
                put_json(tx, &map, key, nested)?;
            }
        }
    }
    Ok(())
}

/// Picks the narrowest scalar representation for a JSON number.
fn scalar_number(number: &serde_json::Number) -> Result<ScalarValue, Box<dyn std::error::Error>> {
    if let Some(int) = number.as_i64() {
        Ok(ScalarValue::Int(int))
    } else if let Some(uint) = number.as_u64() {
        Ok(ScalarValue::Uint(uint))
    } else if let Some(float) = number.as_f64() {
        Ok(ScalarValue::F64(float))
    } else {
        Err(format!("Unrepresentable number: {number}").into())
    }
}
