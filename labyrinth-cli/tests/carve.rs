//! End-to-end checks of the `carve` pipeline through the public library API.

use labyrinth_cli::cli::{CarveCommand, Cli, Command, render_summary, run_cli};
use rstest::rstest;

#[rstest]
#[case(1, 1)]
#[case(6, 3)]
#[case(20, 15)]
fn carve_and_render(#[case] width: usize, #[case] height: usize) {
    let summary = run_cli(Cli {
        command: Command::Carve(CarveCommand {
            width,
            height,
            seed: Some(2024),
            solve: true,
        }),
    })
    .expect("carving succeeds for positive dimensions");

    let mut out = Vec::new();
    render_summary(&summary, &mut out).expect("writing to a Vec succeeds");
    let text = String::from_utf8(out).expect("rendering is ASCII");
    let lines: Vec<&str> = text.lines().collect();

    // Two text rows per maze row, a top border, and the summary line.
    assert_eq!(lines.len(), 2 * height + 2);
    assert!(lines[..=2 * height].iter().all(|line| line.len() == 4 * width + 1));
    assert!(lines[1].starts_with("| * "), "entrance is on the route");

    let route = summary.route.expect("solve was requested");
    let marks = text.matches('*').count();
    assert_eq!(marks, route.len());
    assert!(text.ends_with(&format!(
        "{width}x{height} maze, seed 2024, {} walls removed, route of {} rooms\n",
        width * height - 1,
        route.len()
    )));
}
