use super::*;

fn tmp_file(name: &str, stem: &str, ext: &str) -> FileDescriptor {
    FileDescriptor {
        path: format!("/tmp/{name}"),
        directory: "/tmp/".into(),
        name: name.into(),
        name_without_extension: stem.into(),
        extension: Some(ext.into()),
        ide_type_name: "unknown".into(),
    }
}

#[test]
fn test_detect_kind() {
    assert_eq!(TemplateKind::detect("node"), TemplateKind::Prefix);
    assert_eq!(TemplateKind::detect("python -u"), TemplateKind::Prefix);
    assert_eq!(
        TemplateKind::detect("gleam run -m ${fileNameWithoutExt}"),
        TemplateKind::Placeholder
    );
    // Any dollar sign counts, even without braces.
    assert_eq!(TemplateKind::detect("echo $HOME"), TemplateKind::Placeholder);
}

#[test]
fn test_render_placeholder_template() {
    let template = CommandTemplate::new(
        "cd ${directory} && gcc ${fileName} -o ${fileNameWithoutExt} && ${directory}${fileNameWithoutExt}",
    );
    let rendered = template.render(&tmp_file("a.c", "a", "c"));
    assert_eq!(rendered, "cd /tmp/ && gcc a.c -o a && /tmp/a");
}

#[test]
fn test_render_prefix_template() {
    let template = CommandTemplate::new("node");
    assert_eq!(template.render(&tmp_file("a.js", "a", "js")), "node /tmp/a.js");
}

#[test]
fn test_render_leaves_unknown_placeholders() {
    let template = CommandTemplate::new("run ${workspaceRoot} ${fileName} ${unterminated");
    insta::assert_snapshot!(
        template.render(&tmp_file("a.c", "a", "c")),
        @"run ${workspaceRoot} a.c ${unterminated"
    );
}

#[test]
fn test_render_inside_unknown_token() {
    let template = CommandTemplate::new("${out${fileNameWithoutExt}}");
    assert_eq!(template.render(&tmp_file("a.c", "a", "c")), "${outa}");
}

#[test]
fn test_render_does_not_rescan_values() {
    let mut file = tmp_file("a.c", "a", "c");
    file.directory = "/srv/${fileName}/".into();
    let template = CommandTemplate::new("cd ${directory} && cc ${fileName}");
    assert_eq!(template.render(&file), "cd /srv/${fileName}/ && cc a.c");
}

#[test]
fn test_render_is_order_independent() {
    let file = tmp_file("main.pkl", "main", "pkl");
    let forward = CommandTemplate::new("${directory}${fileName}${fileNameWithoutExt}");
    let backward = CommandTemplate::new("${fileNameWithoutExt}${fileName}${directory}");
    assert_eq!(forward.render(&file), "/tmp/main.plmain");
    assert_eq!(backward.render(&file), "mainmain.pkl/tmp/");
}

#[test]
fn test_render_does_not_quote_paths() {
    let file = FileDescriptor {
        path: "/home/me/my scripts/a b.py".into(),
        directory: "/home/me/my scripts/".into(),
        name: "a b.py".into(),
        name_without_extension: "a b".into(),
        extension: Some("py".into()),
        ide_type_name: "Python".into(),
    };
    assert_eq!(
        CommandTemplate::new("python -u").render(&file),
        "python -u /home/me/my scripts/a b.py"
    );
}

#[test]
fn test_render_directory_without_trailing_slash() {
    let template =
        CommandTemplate::new("haxe --cwd ${directoryWithoutTrailingSlash} --run ${fileNameWithoutExt}");
    insta::assert_snapshot!(
        template.render(&tmp_file("Main.hx", "Main", "hx")),
        @"haxe --cwd /tmp --run Main"
    );
}

#[test]
fn test_render_empty_stem_still_renders() {
    let file = tmp_file(".c", "", "c");
    let template = CommandTemplate::new("cd ${directory} && gcc ${fileName} -o ${fileNameWithoutExt}");
    assert_eq!(template.render(&file), "cd /tmp/ && gcc .c -o ");
}
