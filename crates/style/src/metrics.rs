use crate::px::px_to_int;

/// Font and padding signature of a measured text control.
///
/// Mirror surfaces are shared per distinct signature: two textareas
/// with the same font and padding measure through the same mirror,
/// whatever their widths. The signature is therefore the registry key,
/// which is why it derives `Hash`/`Eq`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MirrorMetrics {
    pub font_px: i32,
    pub font_family: String,
    pub font_weight: String,
    pub padding_top: i32,
    pub padding_right: i32,
    pub padding_bottom: i32,
    pub padding_left: i32,
}

impl MirrorMetrics {
    /// Read font and padding properties out of style declarations
    /// (lowercase property names). Missing numeric entries parse as 0;
    /// a missing font size falls back to the 16px initial value.
    pub fn from_declarations(declarations: &[(String, String)]) -> Self {
        let find = |prop: &str| declarations.iter().find(|(k, _)| k == prop).map(|(_, v)| v);

        let font_px = match find("font-size") {
            Some(v) => px_to_int(v),
            None => 16,
        };

        Self {
            font_px,
            font_family: find("font-family").cloned().unwrap_or_default(),
            font_weight: find("font-weight").cloned().unwrap_or_default(),
            padding_top: find("padding-top").map(|v| px_to_int(v)).unwrap_or(0),
            padding_right: find("padding-right").map(|v| px_to_int(v)).unwrap_or(0),
            padding_bottom: find("padding-bottom").map(|v| px_to_int(v)).unwrap_or(0),
            padding_left: find("padding-left").map(|v| px_to_int(v)).unwrap_or(0),
        }
    }
}

impl Default for MirrorMetrics {
    fn default() -> Self {
        Self {
            font_px: 16,
            font_family: String::new(),
            font_weight: String::new(),
            padding_top: 0,
            padding_right: 0,
            padding_bottom: 0,
            padding_left: 0,
        }
    }
}
