//! README template and its rendering context.

/// File name the README stage writes into the project root.
pub const README_FILE_NAME: &str = "README.md";

/// Fixed README skeleton. Placeholders are `{{PROJECT_NAME}}` and
/// `{{PROJECT_DESCRIPTION}}`.
pub const README_TEMPLATE: &str = r#"# {{PROJECT_NAME}}

## Description

{{PROJECT_DESCRIPTION}}

---

## Features

- Feature 1
- Feature 2
- Feature 3

---

## Installation

```bash
git clone https://github.com/yourusername/{{PROJECT_NAME}}.git
cd {{PROJECT_NAME}}
uv pip install -r requirements.txt
python main.py
```

---

## Usage

```bash
python main.py
```

---

## Project Structure

```
{{PROJECT_NAME}}/
├── README.md
└── main.py
```

---

## Dependencies

- uv
- other-library-name

---

## Contributing

Pull requests are welcome!

---

## License

MIT License
"#;

/// Values substituted into [`README_TEMPLATE`].
///
/// Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
    project_description: String,
}

impl RenderContext {
    const OPEN: &'static str = "{{";
    const CLOSE: &'static str = "}}";

    pub fn new(project_name: impl Into<String>, project_description: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            project_description: project_description.into(),
        }
    }

    fn lookup(&self, variable: &str) -> Option<&str> {
        match variable {
            "PROJECT_NAME" => Some(&self.project_name),
            "PROJECT_DESCRIPTION" => Some(&self.project_description),
            _ => None,
        }
    }

    /// Substitute every known placeholder in one left-to-right pass.
    ///
    /// Inserted values are copied verbatim and never re-scanned, so a
    /// description containing `{{PROJECT_NAME}}` stays literal. Unknown
    /// placeholders are left untouched.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(start) = rest.find(Self::OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + Self::OPEN.len()..];

            match after_open.find(Self::CLOSE) {
                Some(end) => {
                    let variable = &after_open[..end];
                    match self.lookup(variable) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str(Self::OPEN);
                            out.push_str(variable);
                            out.push_str(Self::CLOSE);
                        }
                    }
                    rest = &after_open[end + Self::CLOSE.len()..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
