use simplefs::protocol::Interpreter;
use simplefs::tree::{Limits, Namespace};

fn transcript(input: &str) -> String {
    transcript_with(Namespace::new(), input)
}

fn transcript_with(namespace: Namespace, input: &str) -> String {
    let mut interpreter = Interpreter::new(namespace);
    let mut output = Vec::new();
    interpreter.run(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn end_to_end_session() {
    let input = "create_dir /a\ncreate /a/b\nwrite /a/b \"hi\"\nread /a/b\nfind b\ndelete_r /a\nfind b\nexit\n";
    assert_eq!(
        transcript(input),
        "ok\nok\nok 2\ncontenuto hi\nok /a/b\nok\nno\n"
    );
}

#[test]
fn find_lists_every_match_sorted_by_path() {
    let input = "\
create_dir /z
create_dir /a
create /z/x
create_dir /a/x
create /a/x/x
create /x
find x
";
    assert_eq!(
        transcript(input),
        "ok\nok\nok\nok\nok\nok\nok /a/x\nok /a/x/x\nok /x\nok /z/x\n"
    );
}

#[test]
fn write_replaces_previous_content() {
    let input = "create /f\nwrite /f \"a longer text\"\nwrite /f \"short\"\nread /f\n";
    assert_eq!(transcript(input), "ok\nok 13\nok 5\ncontenuto short\n");
}

#[test]
fn file_and_directory_operations_check_kind() {
    let input = "\
create_dir /d
create /f
read /d
write /d \"x\"
create /f/child
create_dir /d/sub
delete /d
delete_r /d
read /d
";
    assert_eq!(transcript(input), "ok\nok\nno\nno\nno\nok\nno\nok\nno\n");
}

#[test]
fn create_requires_existing_parent() {
    let input = "create /missing/f\ncreate_dir /a\ncreate /a/b/c\ncreate /a/b\ncreate /a/b\n";
    assert_eq!(transcript(input), "no\nok\nno\nok\nno\n");
}

#[test]
fn redundant_separators_are_ignored() {
    let input = "create_dir //a//\ncreate a/b\nread /a///b\nfind b\n";
    assert_eq!(transcript(input), "ok\nok\ncontenuto \nok /a/b\n");
}

#[test]
fn delete_of_root_or_empty_path_fails() {
    assert_eq!(transcript("delete /\ndelete_r /\n"), "no\nno\n");
}

#[test]
fn write_without_content_fails() {
    let input = "create /f\nwrite /f \"\"\nwrite /f\nread /f\n";
    assert_eq!(transcript(input), "ok\nno\nno\ncontenuto \n");
}

#[test]
fn session_ends_at_blank_line() {
    assert_eq!(transcript("create /a\n\ncreate /b\n"), "ok\n");
}

#[test]
fn configured_limits_bound_the_protocol() {
    let limits = Limits {
        max_nodes: 2,
        max_name_length: 3,
        max_depth: 2,
    };
    let input = "\
create /abc
create /abcd
create_dir /d
create /e
create /d/x
";
    assert_eq!(
        transcript_with(Namespace::with_limits(limits), input),
        "ok\nno\nok\nno\nno\n"
    );
}

#[test]
fn non_utf8_content_does_not_end_the_session() {
    let mut interpreter = Interpreter::new(Namespace::new());
    let mut output = Vec::new();
    let input: &[u8] = b"create /f\nwrite /f \"\xff\xfe\"\ncreate /g\nfind g\nread /f\n";
    let stats = interpreter.run(input, &mut output).unwrap();

    assert_eq!(output, b"ok\nok 2\nok\nok /g\ncontenuto \xff\xfe\n");
    assert_eq!(stats.commands, 5);
    assert_eq!(stats.failed, 0);
}
