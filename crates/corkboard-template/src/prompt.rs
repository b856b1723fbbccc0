/// The fixed rules sent ahead of every user instruction. The id naming
/// constraints are load-bearing: hyphen-free column ids and
/// `{columnId}-{n}` task ids keep the composite drag ids parseable.
pub const GENERATOR_PROMPT: &str = r#"
You are an expert template generator. Follow these rules:
- Output must be a single JSON array, not an object.
- The array should contain column objects, each with this structure:
  {
    "id": string,
    "title": string,
    "bg": string,
    "hsva": { "h": number, "s": number, "v": number, "a": number },
    "tasks": [ { "id": string, "title": string, "bg": string } ]
  }
- CRITICAL: ID naming convention for drag-and-drop functionality:
  * Column IDs must be simple strings without hyphens (e.g., "col1", "todo", "doing", "done")
  * Task IDs must follow the pattern: "{columnId}-{taskNumber}" (e.g., "col1-1", "todo-1", "doing-2")
  * This format is required for the drag-and-drop system to work properly
- Do not wrap the array in an object or add any extra properties.
- Do not omit any of the required keys (id, title, bg, hsva, tasks) in any column.
- Only output valid JSON, no explanations or extra text.
- The output must start with '[' and end with ']'.
- Use the user's instruction to fill in the template details.
- Do not invent fields not described in the rules.
"#;
