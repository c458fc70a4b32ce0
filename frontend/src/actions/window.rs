use serde::{ser::SerializeTuple, Serialize, Serializer};

pub const ACT_WINDOW: &str = "ir.actions.act_window";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTarget {
    /// Replace the current view.
    Current,
    /// Open in a dialog on top of the current view.
    New,
}

/// A `(view_id, view_type)` pair. A missing id serializes as `false`, which
/// asks the server for the model's default view of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    pub id: Option<i64>,
    pub kind: String,
}

impl ViewRef {
    pub fn default_of(kind: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: kind.into(),
        }
    }
}

impl Serialize for ViewRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        match self.id {
            Some(id) => pair.serialize_element(&id)?,
            None => pair.serialize_element(&false)?,
        }
        pair.serialize_element(&self.kind)?;
        pair.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAction {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    pub res_model: String,
    pub view_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewRef>,
    pub target: ActionTarget,
}

impl WindowAction {
    pub fn form(res_model: impl Into<String>, target: ActionTarget) -> Self {
        Self {
            action_type: ACT_WINDOW,
            res_model: res_model.into(),
            view_mode: "form".into(),
            view_type: None,
            views: Vec::new(),
            target,
        }
    }

    /// Pins the legacy `view_type` and the default form view.
    pub fn with_default_form_view(mut self) -> Self {
        self.view_type = Some("form".into());
        self.views = vec![ViewRef::default_of("form")];
        self
    }
}
