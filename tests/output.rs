use trak::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("Task added (ID: 1)");
    human.push_summary("ID", "1");
    human.push_summary("Status", "todo");
    human.push_detail("[todo] 1 Buy groceries");
    human.push_next_step("trak mark-in-progress 1");

    let rendered = format_human(&human);
    assert!(rendered.contains("Task added (ID: 1)"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- ID: 1"));
    assert!(rendered.contains("- Status: todo"));
    assert!(rendered.contains("Details:"));
    assert!(rendered.contains("- [todo] 1 Buy groceries"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- trak mark-in-progress 1"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("Tasks");
    let rendered = format_human(&human);
    assert_eq!(rendered, "Tasks");
}
