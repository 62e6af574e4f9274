//! Shared fixture: writes a bundle directory the way a packaging step would.

use std::fs;
use std::path::Path;

pub const APP_NAME_ID: &str = "app_name";
pub const APP_NAME: &str = "MSFSurveyFUP";
pub const FORM_ASSET: &str = "www/js/forms/Child_FUP.json";
pub const FORM_BODY: &[u8] = br#"{"form": "child_fup", "questions": []}"#;

/// Write one asset under `<root>/assets/`, creating parent directories.
pub fn write_asset(root: &Path, rel: &str, bytes: &[u8]) {
    let mut path = root.join("assets");
    for segment in rel.split('/') {
        path.push(segment);
    }
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

/// Write `strings.json` at the bundle root.
pub fn write_strings(root: &Path, entries: &[(&str, &str)]) {
    let mut doc = String::from("{");
    for (i, (id, value)) in entries.iter().enumerate() {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!("\"{id}\": \"{value}\""));
    }
    doc.push('}');
    fs::write(root.join("strings.json"), doc).unwrap();
}

/// An intact bundle: correct app name plus the child follow-up form asset.
pub fn write_intact_bundle(root: &Path) {
    write_strings(root, &[(APP_NAME_ID, APP_NAME)]);
    write_asset(root, FORM_ASSET, FORM_BODY);
}
