//! Cast a fan of rays into a small scene and print the nearest hit per ray.
//!
//! Usage:
//!   cargo run -p geo2d --example raycast_scene
//!   cargo run -p geo2d --example raycast_scene -- 32
//!
//! The scene mixes circles, rects and wall segments. Each line prints the ray
//! angle, the nearest forward distance, and what was hit.

use geo2d::prelude::*;
use std::f64::consts::TAU;

enum Hit {
    Circle(usize),
    Rect(usize),
    Wall(usize),
}

fn main() {
    let rays = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(16)
        .max(1);

    let circles = [Circle::new(8.0, 0.0, 2.0), Circle::new(-5.0, -6.0, 1.5)];
    let rects = [
        Rect::new(-9.0, 3.0, 4.0, 2.0),
        Rect::new(2.0, -9.0, 3.0, 3.0),
    ];
    let walls = [
        (vec2(-12.0, -12.0), vec2(12.0, -12.0)),
        (vec2(12.0, -12.0), vec2(12.0, 12.0)),
        (vec2(12.0, 12.0), vec2(-12.0, 12.0)),
        (vec2(-12.0, 12.0), vec2(-12.0, -12.0)),
    ];

    let eye = vec2(0.0, 0.0);
    for k in 0..rays {
        let angle = k as f64 / rays as f64 * TAU;
        let ray = Ray::from_angle(eye, angle);

        let mut best: Option<(f64, Hit)> = None;
        let mut consider = |t: f64, hit: Hit| {
            if t >= 0.0 && best.as_ref().map_or(true, |(bt, _)| t < *bt) {
                best = Some((t, hit));
            }
        };
        for (i, c) in circles.iter().enumerate() {
            if let Some(t) = ray.intersect_circle(c).and_then(|h| h.entry_t()) {
                consider(t, Hit::Circle(i));
            }
        }
        for (i, r) in rects.iter().enumerate() {
            if let Some(t) = ray.intersect_rect(r).and_then(|h| h.entry_t()) {
                consider(t, Hit::Rect(i));
            }
        }
        for (i, (a, b)) in walls.iter().enumerate() {
            let h = ray.intersect_segment(*a, *b);
            if h.hit {
                consider(h.t, Hit::Wall(i));
            }
        }

        match best {
            Some((t, what)) => {
                let p = ray.at(t);
                let label = match what {
                    Hit::Circle(i) => format!("{}", circles[i]),
                    Hit::Rect(i) => format!("{}", rects[i]),
                    Hit::Wall(i) => format!("wall {i}"),
                };
                println!(
                    "angle {:6.1}°  t = {:7.3}  at ({:6.2}, {:6.2})  {label}",
                    angle.to_degrees(),
                    t,
                    p.x,
                    p.y
                );
            }
            None => println!("angle {:6.1}°  no hit", angle.to_degrees()),
        }
    }
}
