// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::time::Duration;

use anyhow::Result;

use reel::compose::{render, LayerContent};
use reel::config::{ProjectEvent, ProjectFile, ProjectWatcher};
use reel::editor::EditorStore;
use reel::timeline::{ClipKind, NewClip, Region, TextStyle};

fn print_usage() {
    println!("REEL - Video Timeline Engine");
    println!();
    println!("Usage: reel [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --demo                      Build the default project and render sample frames");
    println!("  --render <FILE> <FRAME>     Load a project YAML and print the composition at FRAME");
    println!("  --check <FILE>              Load and validate a project YAML");
    println!("  --watch <FILE|DIR>          Watch project files and report reloads");
    println!("  --help                      Show this help message");
}

fn describe_layer(content: &LayerContent) -> String {
    match content {
        LayerContent::Video { src, offset_frames, .. } => {
            format!("video {} (+{} frames)", src, offset_frames)
        }
        LayerContent::Image { src, .. } => format!("image {}", src),
        LayerContent::Text { text, .. } => format!("text {:?}", text),
        LayerContent::AudioCue { src, volume, .. } => {
            format!("audio {} at volume {:.2}", src, volume)
        }
    }
}

fn print_composition(project: &reel::Project, frame: u64) {
    let composition = render(project, frame);
    println!(
        "Frame {} of {:?} ({}x{}, background {}):",
        frame,
        project.name,
        composition.width,
        composition.height,
        composition.background_color
    );
    if composition.is_empty() {
        println!("  (no active layers)");
        return;
    }
    for (index, layer) in composition.layers.iter().enumerate() {
        println!(
            "  [{}] track {} clip {}: {}",
            index,
            layer.track_id,
            layer.clip_id,
            describe_layer(&layer.content)
        );
    }
}

fn run_demo() {
    let mut store = EditorStore::new();

    store.add_clip(
        "track-1",
        NewClip::new(
            0,
            60,
            ClipKind::Image {
                src: "https://example.com/slide.png".to_string(),
                region: Region::full_canvas(1920, 1080),
            },
        )
        .with_name("Opening slide"),
    );
    store.add_clip(
        "track-2",
        NewClip::new(
            15,
            120,
            ClipKind::Text {
                text: "Welcome".to_string(),
                style: TextStyle::default(),
            },
        ),
    );
    store.add_clip(
        "track-3",
        NewClip::new(
            0,
            300,
            ClipKind::Audio {
                src: "https://example.com/theme.mp3".to_string(),
                volume: 0.8,
                fade_in_frames: 30,
                fade_out_frames: 30,
            },
        ),
    );

    for frame in [0, 45, 90, 299] {
        store.seek(frame);
        print_composition(&store.state().project, store.state().current_frame);
        println!();
    }
}

fn render_file(path: &str, frame: u64) -> Result<()> {
    let file = ProjectFile::load(path)?;
    print_composition(&file.project, frame);
    Ok(())
}

fn check_file(path: &str) -> Result<()> {
    let file = ProjectFile::load(path)?;
    println!(
        "{:?} is valid: {} tracks, {} clips, {} frames at {} fps",
        file.project.name,
        file.project.tracks.len(),
        file.project.clip_count(),
        file.project.duration_in_frames,
        file.project.fps
    );
    Ok(())
}

fn watch_path(path: &str) -> Result<()> {
    let watcher = ProjectWatcher::new(path, None)?;
    println!("Watching {:?} (press Ctrl+C to stop)...", path);

    loop {
        for event in watcher.recv_all() {
            match event {
                ProjectEvent::Reloaded(file) => {
                    println!(
                        "Reloaded {:?}: {} clips over {} frames",
                        file.project.name,
                        file.project.clip_count(),
                        file.project.duration_in_frames
                    );
                }
                ProjectEvent::Error(message) => eprintln!("Reload failed: {}", message),
                ProjectEvent::FileCreated(p) => println!("Created {:?}", p),
                ProjectEvent::FileDeleted(p) => println!("Deleted {:?}", p),
            }
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("REEL - Video Timeline Engine");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--demo" => {
            run_demo();
        }
        "--render" => {
            if args.len() < 4 {
                eprintln!("Error: --render requires a project file and a frame number");
                std::process::exit(1);
            }
            let frame: u64 = args[3]
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid frame number: {}", args[3]))?;
            render_file(&args[2], frame)?;
        }
        "--check" => {
            if args.len() < 3 {
                eprintln!("Error: --check requires a project file");
                std::process::exit(1);
            }
            check_file(&args[2])?;
        }
        "--watch" => {
            if args.len() < 3 {
                eprintln!("Error: --watch requires a file or directory");
                std::process::exit(1);
            }
            watch_path(&args[2])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
