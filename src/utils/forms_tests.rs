use super::*;

#[test]
fn test_image_kind_accepts_spec_types_only() {
    let kind = FileKind::Image;

    for accepted in ["image/jpeg", "image/png", "image/webp", "image/gif"] {
        assert!(kind.accepts(accepted), "{} should be accepted", accepted);
    }
    assert!(!kind.accepts("application/pdf"));
    assert!(!kind.accepts("image/svg+xml"));
}

#[test]
fn test_document_kind_accepts_pdf_and_zip() {
    let kind = FileKind::Document;

    assert!(kind.accepts("application/pdf"));
    assert!(kind.accepts("application/zip"));
    assert!(!kind.accepts("image/png"));
    assert!(!kind.accepts("application/x-msdownload"));
}

#[test]
fn test_flag_only_matches_the_true_literal() {
    let mut fields = HashMap::new();
    fields.insert("keepExistingImages".to_string(), "true".to_string());
    fields.insert("keepExistingDownloads".to_string(), "TRUE".to_string());
    fields.insert("showPrice".to_string(), "yes".to_string());
    let form = Form::from_parts(fields, HashMap::new());

    assert!(form.flag("keepExistingImages"));
    assert!(!form.flag("keepExistingDownloads"));
    assert!(!form.flag("showPrice"));
    assert!(!form.flag("absent"));
}

#[test]
fn test_text_accessors() {
    let mut fields = HashMap::new();
    fields.insert("name".to_string(), "Crane scale".to_string());
    let form = Form::from_parts(fields, HashMap::new());

    assert_eq!(form.text("name"), Some("Crane scale"));
    assert_eq!(form.text("category"), None);
    assert_eq!(form.text_or_default("category"), "");
}

#[test]
fn test_files_accessor_defaults_to_empty() {
    let form = Form::from_parts(HashMap::new(), HashMap::new());

    assert!(form.files("images").is_empty());
    assert!(form.first_file("image").is_none());
}
