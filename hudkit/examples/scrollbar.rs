use std::fs::File;

use hudkit::{
    Anchor, Color, DrawCommand, Frame, InputEvent, Label, MonospaceMeasurer, MouseButton,
    Placement, RecordingCanvas, Scrollbar, Widget, WidgetTree,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Replays a scripted pointer session against a player list scrollbar and
/// prints what each frame would draw.
fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("scrollbar.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let players: Vec<String> = (1..=27).map(|i| format!("player{i:02}")).collect();
    let font = MonospaceMeasurer::new(8, 16);

    let mut bar = Scrollbar::new()
        .placement(Placement::new(Anchor::End, Anchor::Centre).offset(10, 0))
        .height(240);
    bar.set_total_rows(players.len());

    let mut tree = WidgetTree::new()
        .child(
            "title",
            Label::new(&font)
                .color(Color::oklch(0.9, 0.1, 90.0))
                .placement(Placement::new(Anchor::Centre, Anchor::Start).offset(0, 8))
                .text("Players", &font),
        )
        .child("scroll", bar);
    tree.resize(320, 300);

    let script = [
        InputEvent::Wheel { delta: -3.0 },
        InputEvent::Wheel { delta: -0.5 },
        InputEvent::Wheel { delta: -0.5 },
        InputEvent::MouseDown { x: 295, y: 260, button: MouseButton::Left },
        InputEvent::MouseDown { x: 295, y: 40, button: MouseButton::Left },
        InputEvent::MouseDown { x: 295, y: 45, button: MouseButton::Left },
        InputEvent::MouseMove { x: 295, y: 150 },
        InputEvent::MouseUp { x: 295, y: 150, button: MouseButton::Left },
    ];

    let mut cursor = (0, 0);
    for event in script {
        if let InputEvent::MouseMove { x, y } | InputEvent::MouseDown { x, y, .. } = event {
            cursor = (x, y);
        }
        let result = tree.dispatch(&event);

        let Some(bar) = tree.get::<Scrollbar>("scroll") else {
            break;
        };
        let rows = bar.region().visible_range();
        println!("{event:?} -> {result:?}");
        println!("  showing {:?}", &players[rows]);

        let mut canvas = RecordingCanvas::new();
        tree.render(&mut Frame::new(&mut canvas, cursor));
        for cmd in canvas.commands() {
            match cmd {
                DrawCommand::FillRect { rect, color } => println!(
                    "  rect {:>4},{:>4} {:>3}x{:<3} rgba({}, {}, {}, {})",
                    rect.x, rect.y, rect.width, rect.height, color.r, color.g, color.b, color.a
                ),
                DrawCommand::Text { x, y, text, .. } => println!("  text {x:>4},{y:>4} {text}"),
            }
        }
    }

    Ok(())
}
