use std::collections::BTreeMap;

use action_wiring::extract::ElementType;
use action_wiring::mapping::{
    ActionMapping, InputSchema, ParameterSource, PropertySchema, ToolSchema,
};

/// A small login page: one form with two fields, one external link, one
/// standalone refresh button.
pub const LOGIN_PAGE: &str = r#"
<div class="page">
  <h1>Sign in</h1>
  <form id="login">
    <input id="email" name="email" type="email" required>
    <input id="password" name="password" type="password" required>
    <button type="submit">Sign In</button>
  </form>
  <button id="refresh">Refresh</button>
  <a href="https://example.com/help">Help</a>
</div>
"#;

/// Build a tool schema with typed properties and a required list.
pub fn tool(
    name: &str,
    server: &str,
    properties: &[(&str, &str)],
    required: &[&str],
) -> ToolSchema {
    let props: BTreeMap<String, PropertySchema> = properties
        .iter()
        .map(|(prop_name, prop_type)| {
            (
                prop_name.to_string(),
                PropertySchema {
                    property_type: Some(prop_type.to_string()),
                    description: None,
                    allowed_values: None,
                },
            )
        })
        .collect();

    ToolSchema {
        name: name.to_string(),
        description: None,
        input_schema: Some(InputSchema {
            schema_type: Some("object".to_string()),
            properties: if props.is_empty() { None } else { Some(props) },
            required: if required.is_empty() {
                None
            } else {
                Some(required.iter().map(|r| r.to_string()).collect())
            },
        }),
        server_name: server.to_string(),
    }
}

/// Build a mapping with no sources; add them with `with_source`.
pub fn mapping(
    id: &str,
    element_id: &str,
    element_type: ElementType,
    tool_name: &str,
    server: &str,
) -> ActionMapping {
    ActionMapping {
        id: id.to_string(),
        ui_element_id: element_id.to_string(),
        ui_element_type: element_type,
        tool_name: tool_name.to_string(),
        server_name: server.to_string(),
        parameter_sources: BTreeMap::new(),
        parameter_bindings: BTreeMap::new(),
        response_handler: None,
    }
}

pub fn with_source(mut mapping: ActionMapping, parameter: &str, source: ParameterSource) -> ActionMapping {
    mapping
        .parameter_sources
        .insert(parameter.to_string(), source);
    mapping
}

pub fn with_binding(mut mapping: ActionMapping, parameter: &str, binding: &str) -> ActionMapping {
    mapping
        .parameter_bindings
        .insert(parameter.to_string(), binding.to_string());
    mapping
}
