/// Tests for panel table extraction
///
/// Row strings are built with `row()` so the item/result gap is always
/// wide enough to match the panel row pattern.
#[cfg(test)]
mod tests {
    use crate::panel::*;
    use crate::types::{PANEL_MARKER, PanelFormat, Table};

    fn row(item: &str, result: &str, date: &str) -> String {
        format!("{}            {}({})", item, result, date)
    }

    fn panel(rows: &[String]) -> Table {
        let mut t = Table::new(&format!("{} 尿液常規", PANEL_MARKER));
        t.push("==========================");
        for r in rows {
            t.push(r);
        }
        t
    }

    #[test]
    fn test_parse_panel_row() {
        let parsed = parse_panel_row("  Glucose          Negative(20230101)  ").unwrap();
        assert_eq!(
            parsed,
            PanelRow { item: "Glucose".to_string(), result: "Negative".to_string(), date: "2023/01/01".to_string() }
        );
    }

    #[test]
    fn test_parse_multiword_item_and_result() {
        let parsed = parse_panel_row(&row("Occult Blood", "1+ (trace)", "20231231")).unwrap();
        assert_eq!(parsed.item, "Occult Blood");
        assert_eq!(parsed.result, "1+ (trace)");
        assert_eq!(parsed.date, "2023/12/31");
    }

    #[test]
    fn test_non_matching_rows_rejected() {
        assert!(parse_panel_row("Glucose   Negative(20230101)").is_none());
        assert!(parse_panel_row("Glucose          Negative").is_none());
        assert!(parse_panel_row("Glucose          Negative(2023011)").is_none());
        assert!(parse_panel_row("Glucose          Negative(20230101) extra").is_none());
        assert!(parse_panel_row("").is_none());
    }

    #[test]
    fn test_format_panel_date() {
        assert_eq!(format_panel_date("20230101"), "2023/01/01");
        assert_eq!(format_panel_date("19991231"), "1999/12/31");
    }

    #[test]
    fn test_legacy_single_row() {
        let mut t = Table::new(PANEL_MARKER);
        t.push("----");
        t.push("Glucose          Negative(20230101)");
        assert_eq!(process_panel_table(&t, PanelFormat::Legacy), vec!["[2023/01/01] Glucose:Negative"]);
    }

    #[test]
    fn test_legacy_never_groups_or_filters() {
        let t = panel(&[
            row("Urine strip", "-", "20230101"),
            row("Protein", "Negative", "20230101"),
            row("Color", "-", "20230101"),
            row("CRP", "***", "20230101"),
            "garbage line".to_string(),
            row("RBC", "0-2", "20230102"),
        ]);
        assert_eq!(
            process_legacy(&t),
            vec![
                "[2023/01/01] Urine strip:-",
                "[2023/01/01] Protein:Negative",
                "[2023/01/01] Color:-",
                "[2023/01/01] CRP:***",
                "[2023/01/02] RBC:0-2",
            ]
        );
    }

    #[test]
    fn test_grouped_merges_strip_items() {
        let mut t = Table::new(PANEL_MARKER);
        t.push("----");
        t.push("Protein          Negative(20230101)");
        t.push("Color          Yellow(20230101)");
        assert_eq!(
            process_panel_table(&t, PanelFormat::Grouped),
            vec!["[2023/01/01] Urine strip: Protein:Negative, Color:Yellow"]
        );
    }

    #[test]
    fn test_grouped_strip_before_sediment() {
        let t = panel(&[
            row("Urine sediment", "-", "20230101"),
            row("RBC", "0-2", "20230101"),
            row("Urine strip", "-", "20230101"),
            row("pH", "6.0", "20230101"),
            row("WBC", "5-10", "20230101"),
            row("Sp.gr", "1.015", "20230101"),
        ]);
        assert_eq!(
            process_grouped(&t),
            vec!["[2023/01/01] Urine strip: pH:6.0, Sp.gr:1.015", "[2023/01/01] Urine sediment: RBC:0-2, WBC:5-10"]
        );
    }

    #[test]
    fn test_grouped_drops_dash_for_sub_items_only() {
        let t = panel(&[
            row("Protein", "-", "20230101"),
            row("Ketone", "***", "20230101"),
            row("Nitrite", "Negative", "20230101"),
            row("Cast", "-", "20230101"),
        ]);
        // "***" is only a skip result for standalone items
        assert_eq!(process_grouped(&t), vec!["[2023/01/01] Urine strip: Ketone:***, Nitrite:Negative"]);
    }

    #[test]
    fn test_grouped_standalone_item_flushes_pending_first() {
        let t = panel(&[
            row("Protein", "Negative", "20230101"),
            row("CRP", "0.5", "20230101"),
            row("Color", "Yellow", "20230101"),
        ]);
        assert_eq!(
            process_grouped(&t),
            vec!["[2023/01/01] Urine strip: Protein:Negative", "[2023/01/01] CRP:0.5", "[2023/01/01] Urine strip: Color:Yellow"]
        );
    }

    #[test]
    fn test_grouped_skipped_standalone_does_not_split_group() {
        let t = panel(&[
            row("Protein", "Negative", "20230101"),
            row("CRP", "***", "20230101"),
            row("HBsAg", "-", "20230101"),
            row("Color", "Yellow", "20230101"),
        ]);
        assert_eq!(process_grouped(&t), vec!["[2023/01/01] Urine strip: Protein:Negative, Color:Yellow"]);
    }

    #[test]
    fn test_grouped_date_change_flushes_with_previous_date() {
        let t = panel(&[
            row("Protein", "Negative", "20230101"),
            row("RBC", "0-2", "20230101"),
            row("Protein", "1+", "20230215"),
            row("Urine strip", "-", "20230301"),
            row("Glucose", "Trace", "20230301"),
        ]);
        assert_eq!(
            process_grouped(&t),
            vec![
                "[2023/01/01] Urine strip: Protein:Negative",
                "[2023/01/01] Urine sediment: RBC:0-2",
                "[2023/02/15] Urine strip: Protein:1+",
                "[2023/03/01] Urine strip: Glucose:Trace",
            ]
        );
    }

    #[test]
    fn test_grouped_empty_table() {
        assert!(process_grouped(&panel(&[])).is_empty());
        assert!(process_grouped(&Table::new(PANEL_MARKER)).is_empty());
    }

    #[test]
    fn test_group_state_flush() {
        let mut state = GroupState::new();
        let mut out = Vec::new();

        state.flush(&mut out);
        assert!(out.is_empty());

        state.enter_date("2024/05/01", &mut out);
        state.push(UrineGroup::Sediment, "Yeast:None".to_string());
        state.push(UrineGroup::Strip, "pH:7.0".to_string());
        assert!(!state.is_empty());

        state.flush(&mut out);
        assert_eq!(out, vec!["[2024/05/01] Urine strip: pH:7.0", "[2024/05/01] Urine sediment: Yeast:None"]);
        assert!(state.is_empty());
        assert_eq!(state.date.as_deref(), Some("2024/05/01"));

        // Same date does not flush
        state.push(UrineGroup::Strip, "Color:Yellow".to_string());
        state.enter_date("2024/05/01", &mut out);
        assert_eq!(out.len(), 2);
        state.enter_date("2024/05/02", &mut out);
        assert_eq!(out.last().map(|s| s.as_str()), Some("[2024/05/01] Urine strip: Color:Yellow"));
    }

    #[test]
    fn test_urine_group_membership() {
        assert_eq!(UrineGroup::of_item("Leucocyte esterase"), Some(UrineGroup::Strip));
        assert_eq!(UrineGroup::of_item("EP.cell"), Some(UrineGroup::Sediment));
        assert_eq!(UrineGroup::of_item("WBC"), Some(UrineGroup::Sediment));
        assert_eq!(UrineGroup::of_item("glucose"), None);
        assert_eq!(UrineGroup::of_item("CRP"), None);
    }
}
