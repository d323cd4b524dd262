//! Console outline of a small geographic tree.
//!
//! Type the id of a folder and press Enter to expand or collapse it, `all`
//! to expand everything, or an empty line to quit. Logs go to
//! `outline.log`.

use std::fs::File;
use std::io::{self, BufRead, Write};

use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};
use treefold::prelude::*;

/// One printed line plus the toggle bound to it.
struct Line<'a> {
    id: String,
    text: String,
    toggle: ToggleProps<'a>,
}

fn row<'a>(view: &NodeView<'a, Value, Vec<Line<'a>>>) -> Vec<Line<'a>> {
    let marker = match (view.is_folder(), view.is_expanded()) {
        (true, true) => "▼ ",
        (true, false) => "▶ ",
        (false, _) => "  ",
    };
    let name = view.node()["name"].as_str().unwrap_or(view.id());

    let mut lines = vec![Line {
        id: view.id().to_string(),
        text: format!("{}{}{}", "  ".repeat(view.depth()), marker, name),
        toggle: view.toggle_props(),
    }];
    if view.is_expanded() && view.has_child_nodes() {
        lines.extend(view.render_child_nodes().into_iter().flatten());
    }
    lines
}

fn geo_data() -> Vec<Value> {
    vec![
        json!({
            "id": "europe",
            "name": "Europe",
            "children": [
                { "id": "fr", "name": "France", "children": [
                    { "id": "fr-paris", "name": "Paris" },
                    { "id": "fr-lyon", "name": "Lyon" },
                ]},
                { "id": "es", "name": "Spain", "children": [
                    { "id": "es-madrid", "name": "Madrid" },
                ]},
            ],
        }),
        json!({
            "id": "americas",
            "name": "Americas",
            "children": [
                { "id": "ca", "name": "Canada", "children": [] },
                { "id": "uy", "name": "Uruguay", "children": [
                    { "id": "uy-mvd", "name": "Montevideo" },
                ]},
            ],
        }),
        json!({ "id": "antarctica", "name": "Antarctica" }),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("outline.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let nodes = geo_data();
    let tree = Treefold::with_config(TreefoldConfig::new("Outline"));
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        let lines: Vec<Line<'_>> = tree
            .render(TreeProps::new().nodes(&nodes).render(row))?
            .into_iter()
            .flatten()
            .collect();
        for line in &lines {
            println!("{}", line.text);
        }

        print!("toggle> ");
        io::stdout().flush()?;
        input.clear();
        stdin.lock().read_line(&mut input)?;
        let command = input.trim();

        match command {
            "" => break,
            "all" => tree.state().expand_all(&nodes, &Accessors::default()),
            id => match lines.iter().find(|line| line.id == id) {
                Some(line) => {
                    let enter = Event::Key(KeyCombo::key(Key::Enter));
                    if !line.toggle.handle(&enter).is_handled() {
                        println!("'{id}' has nothing to expand");
                    }
                }
                None => println!("'{id}' is not visible"),
            },
        }
        println!();
    }

    Ok(())
}
