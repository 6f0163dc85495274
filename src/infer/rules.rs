use crate::infer::inference_model::ImplementationType;

// ============================================================================
// Heuristic rule lists
//
// Ordered, first match wins. Each rule is plain data plus a predicate fn,
// so individual heuristics are testable and new ones slot in without
// touching engine control flow.
// ============================================================================

/// Signals collected from one form before rule evaluation.
#[derive(Debug, Clone)]
pub struct FormSignals {
    /// Lowercased form id.
    pub form_id: String,
    /// Lowercased field keys and names, joined with the form id.
    pub haystack: String,
    /// Raw field type strings, lowercased.
    pub field_types: Vec<String>,
}

impl FormSignals {
    pub fn new(form_id: &str, field_names: &[&str], field_types: &[&str]) -> FormSignals {
        let mut haystack = form_id.to_lowercase();
        for name in field_names {
            haystack.push(' ');
            haystack.push_str(&name.to_lowercase());
        }
        FormSignals {
            form_id: form_id.to_lowercase(),
            haystack,
            field_types: field_types.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn has_field_type(&self, wanted: &str) -> bool {
        self.field_types.iter().any(|t| t == wanted)
    }

    fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.haystack.contains(k))
    }
}

pub struct FormRule {
    pub name: &'static str,
    pub applies: fn(&FormSignals) -> bool,
    pub purpose: &'static str,
    pub implementation_type: ImplementationType,
    pub suggested_implementation: &'static str,
}

pub const FORM_RULES: &[FormRule] = &[
    FormRule {
        name: "authentication",
        applies: form_is_auth,
        purpose: "Authenticate a user with the submitted credentials",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Look the user up in the account store and verify the password hash",
    },
    FormRule {
        name: "registration",
        applies: form_is_registration,
        purpose: "Register a new user account",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Insert a new account record after validating uniqueness",
    },
    FormRule {
        name: "contact",
        applies: form_is_contact,
        purpose: "Send the submitted message to the site owner",
        implementation_type: ImplementationType::Email,
        suggested_implementation: "Compose an email from the submitted fields and deliver it",
    },
    FormRule {
        name: "subscription",
        applies: form_is_subscription,
        purpose: "Subscribe the given address to a mailing list",
        implementation_type: ImplementationType::Email,
        suggested_implementation: "Add the address to the list and send a confirmation email",
    },
    FormRule {
        name: "search",
        applies: form_is_search,
        purpose: "Search stored records matching the submitted query",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Run a filtered query over the backing store and return matches",
    },
    FormRule {
        name: "payment",
        applies: form_is_payment,
        purpose: "Process a payment or order",
        implementation_type: ImplementationType::ApiCall,
        suggested_implementation: "Forward the order to the payment provider and record the result",
    },
    FormRule {
        name: "calculation",
        applies: form_is_calculation,
        purpose: "Compute a result from the submitted numbers",
        implementation_type: ImplementationType::Calculation,
        suggested_implementation: "Evaluate the calculation from the numeric inputs and return it",
    },
    FormRule {
        name: "upload",
        applies: form_is_upload,
        purpose: "Store an uploaded file",
        implementation_type: ImplementationType::FileOperation,
        suggested_implementation: "Persist the uploaded file and return its storage reference",
    },
    // Fallback: always matches, keep last.
    FormRule {
        name: "storage",
        applies: form_any,
        purpose: "Store the submitted form data",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Insert the submitted fields as a new record",
    },
];

fn form_is_auth(s: &FormSignals) -> bool {
    s.has_field_type("password") && !s.mentions(&["register", "signup", "sign-up", "sign_up"])
}

fn form_is_registration(s: &FormSignals) -> bool {
    s.mentions(&["register", "signup", "sign-up", "sign_up"])
}

fn form_is_contact(s: &FormSignals) -> bool {
    s.mentions(&["contact", "message", "feedback", "inquiry"])
}

fn form_is_subscription(s: &FormSignals) -> bool {
    s.mentions(&["subscribe", "newsletter"])
}

fn form_is_search(s: &FormSignals) -> bool {
    s.mentions(&["search", "query", "filter"])
}

fn form_is_payment(s: &FormSignals) -> bool {
    s.mentions(&["payment", "checkout", "order", "billing"])
}

fn form_is_calculation(s: &FormSignals) -> bool {
    s.mentions(&["amount", "price", "total", "quantity", "calc", "rate"])
}

fn form_is_upload(s: &FormSignals) -> bool {
    s.has_field_type("file") || s.mentions(&["upload", "attachment"])
}

fn form_any(_: &FormSignals) -> bool {
    true
}

// ============================================================================
// Button rules — matched against the button's id and visible text
// ============================================================================

pub struct ButtonRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub purpose: &'static str,
    pub implementation_type: ImplementationType,
    pub suggested_implementation: &'static str,
}

pub const BUTTON_RULES: &[ButtonRule] = &[
    ButtonRule {
        name: "delete",
        keywords: &["delete", "remove", "clear"],
        purpose: "Delete the targeted record",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Remove the record identified by the invocation context",
    },
    ButtonRule {
        name: "save",
        keywords: &["save", "submit", "add", "create", "update"],
        purpose: "Persist the current data",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Write the current state to the backing store",
    },
    ButtonRule {
        name: "send",
        keywords: &["send", "email", "notify", "invite"],
        purpose: "Send a notification",
        implementation_type: ImplementationType::Email,
        suggested_implementation: "Compose and deliver the notification message",
    },
    ButtonRule {
        name: "fetch",
        keywords: &["refresh", "reload", "sync", "fetch", "load"],
        purpose: "Fetch fresh data from the backend",
        implementation_type: ImplementationType::ApiCall,
        suggested_implementation: "Call the backing service and return the refreshed payload",
    },
    ButtonRule {
        name: "export",
        keywords: &["export", "download", "upload", "import"],
        purpose: "Move data in or out as a file",
        implementation_type: ImplementationType::FileOperation,
        suggested_implementation: "Serialize the data to a file or ingest the provided one",
    },
    ButtonRule {
        name: "calculate",
        keywords: &["calculate", "compute", "convert", "estimate"],
        purpose: "Compute a derived value",
        implementation_type: ImplementationType::Calculation,
        suggested_implementation: "Evaluate the computation and return the result",
    },
    ButtonRule {
        name: "search",
        keywords: &["search", "find", "lookup"],
        purpose: "Search stored records",
        implementation_type: ImplementationType::Database,
        suggested_implementation: "Run a filtered query and return matches",
    },
];

/// First matching form rule. The trailing fallback rule guarantees a
/// result.
pub fn match_form_rule(signals: &FormSignals) -> &'static FormRule {
    FORM_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .unwrap_or(&FORM_RULES[FORM_RULES.len() - 1])
}

/// First matching button rule, or `None`: not every button is a tool
/// trigger.
pub fn match_button_rule(haystack: &str) -> Option<&'static ButtonRule> {
    let lower = haystack.to_lowercase();
    BUTTON_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
}
