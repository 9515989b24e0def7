use rastrum::prelude::*;
use rastrum::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

const MOVE_SPEED: f32 = 3.0;
const SPIN_SPEED: f32 = 0.8;

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // One cube at the origin and one along each positive axis.
    for position in [Vec3::ZERO, Vec3::FORWARD * 2.0, Vec3::RIGHT * 2.0, Vec3::UP * 2.0] {
        let mut actor = MeshActor::new(Mesh::cube());
        actor.transform.set_position(position);
        scene.push(actor);
    }

    scene
}

fn build_camera(width: u32, height: u32) -> Camera {
    let mut camera = Camera::new();
    camera.set_aspect_from_bounds(width, height);
    camera
        .transform
        .set_position(Vec3::FORWARD * 3.0 + Vec3::UP + Vec3::RIGHT)
        .look_at(Vec3::ZERO);
    camera
}

fn animate(scene: &mut Scene, delta_s: f32, total_s: f32) {
    let spin = Quat::from_yaw_pitch_roll(
        SPIN_SPEED * delta_s,
        SPIN_SPEED * delta_s,
        SPIN_SPEED * delta_s,
    );
    // Oscillates through zero and negative scale; the pipeline tolerates
    // both (degenerate draw, flipped winding culls away).
    let pulse = total_s.cos();

    for actor in scene.actors_mut() {
        actor.transform.rotate(spin).set_scale_uniform(pulse);
    }
}

fn move_camera(camera: &mut Camera, input: InputState, delta_s: f32) {
    if !input.any() {
        return;
    }

    let mut direction = Vec3::ZERO;
    if input.forward {
        direction = direction + camera.transform.forward();
    }
    if input.back {
        direction = direction - camera.transform.forward();
    }
    if input.right {
        direction = direction + camera.transform.right();
    }
    if input.left {
        direction = direction - camera.transform.right();
    }
    if input.up {
        direction = direction + Vec3::UP;
    }
    if input.down {
        direction = direction - Vec3::UP;
    }

    if direction.dot(direction) > 0.0 {
        camera
            .transform
            .translate(direction.normalize() * (MOVE_SPEED * delta_s));
    }
}

/// Headless mode: render one frame and write it to a PNG.
fn screenshot(path: &str) -> Result<(), String> {
    let scene = build_scene();
    let camera = build_camera(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut buffer = Buffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    buffer.clear(colors::BACKGROUND);
    camera.render(&mut buffer, &scene);

    buffer.save_png(path).map_err(|e| e.to_string())?;
    println!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(i) = args.iter().position(|a| a == "--screenshot") {
        let path = args
            .get(i + 1)
            .ok_or("--screenshot requires an output path")?;
        return screenshot(path);
    }

    let mut window = Window::new("rastrum", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut buffer = Buffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut scene = build_scene();
    let mut camera = build_camera(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut limiter = FrameLimiter::new(&window);
    let mut fps = FpsCounter::new(&window);
    let mut total_s = 0.0f32;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                buffer = Buffer::new(w, h);
                camera.set_aspect_from_bounds(w, h);
            }
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        // Clamp long stalls (window drags, debugger pauses) so the
        // simulation never jumps.
        let delta_s = (delta_ms as f32 / 1000.0).min(0.1);
        total_s += delta_s;

        move_camera(&mut camera, window.input_state(), delta_s);
        animate(&mut scene, delta_s, total_s);

        buffer.clear(colors::BACKGROUND);
        camera.render(&mut buffer, &scene);
        window.present(buffer.as_bytes())?;

        if let Some(fps) = fps.tick(&window) {
            window.set_title(&format!("rastrum - {fps:.0} fps"))?;
        }
    }

    Ok(())
}
