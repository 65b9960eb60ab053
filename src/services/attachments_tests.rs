use super::*;

fn attachment(key: &str) -> Attachment {
    Attachment {
        role: "images".to_string(),
        key: key.to_string(),
        original_name: format!("{}.png", key),
        url: format!("http://localhost:9000/cms-uploads/{}", key),
    }
}

#[cfg(test)]
mod slot {
    use super::*;

    #[test]
    fn new_upload_replaces_existing_regardless_of_flag() {
        for keep_existing in [true, false] {
            let plan = reconcile_slot(
                Some(attachment("old")),
                Some(attachment("new")),
                keep_existing,
            );

            assert_eq!(plan.value, Some(attachment("new")));
            assert_eq!(plan.stale, vec![attachment("old")]);
        }
    }

    #[test]
    fn new_upload_into_empty_slot_deletes_nothing() {
        let plan = reconcile_slot(None, Some(attachment("new")), false);

        assert_eq!(plan.value, Some(attachment("new")));
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn no_upload_keep_existing_leaves_slot_untouched() {
        let plan = reconcile_slot(Some(attachment("old")), None, true);

        assert_eq!(plan.value, Some(attachment("old")));
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn no_upload_without_keep_clears_slot_and_retires_blob() {
        let plan = reconcile_slot(Some(attachment("old")), None, false);

        assert_eq!(plan.value, None);
        assert_eq!(plan.stale, vec![attachment("old")]);
    }

    #[test]
    fn empty_slot_without_keep_is_a_no_op() {
        let plan = reconcile_slot(None, None, false);

        assert_eq!(plan.value, None);
        assert!(plan.stale.is_empty());
    }
}

#[cfg(test)]
mod set {
    use super::*;

    #[test]
    fn uploads_with_keep_existing_append() {
        let plan = reconcile_set(
            vec![attachment("a"), attachment("b")],
            vec![attachment("c")],
            true,
        );

        assert_eq!(
            plan.value,
            vec![attachment("a"), attachment("b"), attachment("c")]
        );
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn uploads_without_keep_replace_and_retire_all_old() {
        let plan = reconcile_set(
            vec![attachment("a"), attachment("b")],
            vec![attachment("c")],
            false,
        );

        assert_eq!(plan.value, vec![attachment("c")]);
        assert_eq!(plan.stale, vec![attachment("a"), attachment("b")]);
    }

    #[test]
    fn no_uploads_with_keep_existing_is_unchanged() {
        let plan = reconcile_set(vec![attachment("a")], Vec::new(), true);

        assert_eq!(plan.value, vec![attachment("a")]);
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn no_uploads_without_keep_clears_the_set() {
        let plan = reconcile_set(vec![attachment("a"), attachment("b")], Vec::new(), false);

        assert!(plan.value.is_empty());
        assert_eq!(plan.stale, vec![attachment("a"), attachment("b")]);
    }

    #[test]
    fn empty_existing_set_never_produces_stale_blobs() {
        for keep_existing in [true, false] {
            let plan = reconcile_set(Vec::new(), vec![attachment("c")], keep_existing);

            assert_eq!(plan.value, vec![attachment("c")]);
            assert!(plan.stale.is_empty());
        }
    }
}
