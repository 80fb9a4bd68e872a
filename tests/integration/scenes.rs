//! Scenes mounted on a shared event loop

use nightsky_foundation::{Timestamp, Vec2, Viewport};
use nightsky_runtime::{EventLoop, MountedScene, Scene};

#[test]
fn home_page_scene_runs_and_tears_down() {
    let mut lp = EventLoop::new(Viewport::default());
    let mut scene = MountedScene::mount(&lp, Scene::All, 21, &[]).unwrap();

    for step in 0..300u16 {
        lp.pointer_move(Vec2::new(200.0 + f32::from(step), 300.0));
        lp.step();
        scene.take_frames();
    }
    assert!(!scene.layer("cursor_sparkles").unwrap().is_empty());
    assert!(scene.layer("mouse_trail").unwrap().len() <= 64);
    assert!(scene.cursor().is_some());

    scene.teardown();
    assert_eq!(lp.listener_count(), 0);
    let frozen = scene.stats();
    lp.run_until(Timestamp::from_millis(60_000));
    assert_eq!(scene.stats(), frozen);
}

#[test]
fn frames_only_for_changed_layers() {
    let mut lp = EventLoop::new(Viewport::default());
    let mut scene = MountedScene::mount(&lp, Scene::Backdrop, 3, &[]).unwrap();

    let first = scene.take_frames();
    assert_eq!(first.len(), 2);

    lp.run_until(Timestamp::from_millis(500));
    assert!(scene.take_frames().is_empty());

    lp.run_until(Timestamp::from_millis(2_000));
    let frames = scene.take_frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].field, "shooting_stars");
}

#[test]
fn scenes_parse_from_names() {
    assert_eq!("trail".parse::<Scene>().unwrap(), Scene::Trail);
    assert!("Trail".parse::<Scene>().is_err());
}
