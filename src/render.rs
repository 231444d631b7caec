// Canvas 2D drawing for the ocean creatures. Every routine brackets its work
// in save()/restore() and draws in creature-local coordinates.
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::state::{Creature, CreatureKind, School};

pub fn draw_school(ctx: &CanvasRenderingContext2d, school: &School, now_ms: f64) {
    ctx.clear_rect(0.0, 0.0, school.width, school.height);
    for c in school.creatures() {
        draw_creature(ctx, c, now_ms);
    }
}

pub fn draw_creature(ctx: &CanvasRenderingContext2d, c: &Creature, now_ms: f64) {
    ctx.save();
    ctx.translate(c.x, c.y).ok();
    match c.kind {
        CreatureKind::Fish => draw_fish(ctx, c),
        CreatureKind::Dolphin => draw_dolphin(ctx, c),
        CreatureKind::Jellyfish => draw_jellyfish(ctx, c, now_ms),
        CreatureKind::Seahorse => draw_seahorse(ctx, c, now_ms),
        CreatureKind::Starfish => draw_starfish(ctx, c),
        CreatureKind::Treasure => draw_treasure(ctx, c, now_ms),
        CreatureKind::Seaweed => draw_seaweed(ctx, c, now_ms),
    }
    ctx.restore();
}

fn ellipse(ctx: &CanvasRenderingContext2d, x: f64, y: f64, rx: f64, ry: f64, rot: f64) {
    ctx.begin_path();
    ctx.ellipse(x, y, rx, ry, rot, 0.0, PI * 2.0).ok();
    ctx.fill();
}

fn dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, PI * 2.0).ok();
    ctx.fill();
}

fn draw_fish(ctx: &CanvasRenderingContext2d, c: &Creature) {
    let s = c.size;
    ctx.rotate(c.angle).ok();

    // body: radial fade from solid to translucent
    match ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, s) {
        Ok(g) => {
            g.add_color_stop(0.0, &c.color.css()).ok();
            g.add_color_stop(0.7, &c.color.css_alpha(0.8)).ok();
            g.add_color_stop(1.0, &c.color.css_alpha(0.4)).ok();
            ctx.set_fill_style_canvas_gradient(&g);
        }
        Err(_) => ctx.set_fill_style_str(&c.color.css()),
    }
    ellipse(ctx, 0.0, 0.0, s, s * 0.6, 0.0);

    if c.striped {
        ctx.set_fill_style_str(&c.color.css_alpha(0.3));
        for i in 0..3 {
            ellipse(ctx, s * 0.2 * i as f64 - s * 0.3, 0.0, s * 0.1, s * 0.5, 0.0);
        }
    }

    // tail
    ctx.set_fill_style_str(&c.color.css());
    ctx.begin_path();
    ctx.move_to(-s, 0.0);
    ctx.line_to(-s * 1.5, -s * 0.5);
    ctx.line_to(-s * 1.2, 0.0);
    ctx.line_to(-s * 1.5, s * 0.5);
    ctx.close_path();
    ctx.fill();

    ctx.set_fill_style_str(&c.color.css_alpha(0.7));
    ellipse(ctx, 0.0, s * 0.4, s * 0.3, s * 0.2, PI * 0.3);

    ctx.set_fill_style_str("white");
    dot(ctx, s * 0.3, -s * 0.2, s * 0.15);
    ctx.set_fill_style_str("black");
    dot(ctx, s * 0.35, -s * 0.2, s * 0.08);
    ctx.set_fill_style_str("white");
    dot(ctx, s * 0.37, -s * 0.22, s * 0.03);
}

fn draw_dolphin(ctx: &CanvasRenderingContext2d, c: &Creature) {
    let s = c.size;
    ctx.rotate(c.angle).ok();
    ctx.set_fill_style_str(&c.color.css());
    ellipse(ctx, 0.0, 0.0, s, s * 0.4, 0.0);
    // beak
    ellipse(ctx, s * 0.8, 0.0, s * 0.3, s * 0.2, 0.0);

    ctx.begin_path();
    ctx.move_to(-s, 0.0);
    ctx.line_to(-s * 1.3, -s * 0.4);
    ctx.line_to(-s * 1.1, 0.0);
    ctx.line_to(-s * 1.3, s * 0.4);
    ctx.close_path();
    ctx.fill();

    ellipse(ctx, 0.0, -s * 0.3, s * 0.2, s * 0.4, PI * 0.3);

    ctx.set_fill_style_str("black");
    dot(ctx, s * 0.3, -s * 0.15, s * 0.08);
    ctx.set_fill_style_str("white");
    dot(ctx, s * 0.32, -s * 0.17, s * 0.03);
}

fn draw_jellyfish(ctx: &CanvasRenderingContext2d, c: &Creature, now_ms: f64) {
    let s = c.size;
    let color = c.color.css();
    ctx.set_fill_style_str(&color);
    ctx.set_global_alpha(0.7);
    ctx.begin_path();
    ctx.arc_with_anticlockwise(0.0, 0.0, s, 0.0, PI, true).ok();
    ctx.fill();

    ctx.set_stroke_style_str(&color);
    ctx.set_line_width(2.0);
    ctx.set_global_alpha(0.5);
    let len = s * 2.0;
    for i in 0..6 {
        let angle = (i as f64 / 6.0) * PI - PI / 2.0;
        let wave = (now_ms * 0.005 + c.phase + i as f64).sin() * 10.0;
        ctx.begin_path();
        ctx.move_to(angle.cos() * s * 0.8, 0.0);
        ctx.quadratic_curve_to(
            angle.cos() * s + wave,
            len / 2.0,
            angle.cos() * s * 0.5 + wave * 2.0,
            len,
        );
        ctx.stroke();
    }
}

fn draw_seahorse(ctx: &CanvasRenderingContext2d, c: &Creature, now_ms: f64) {
    let s = c.size;
    let color = c.color.css();
    ctx.rotate(c.angle).ok();
    ctx.set_stroke_style_str(&color);
    ctx.set_fill_style_str(&color);
    ctx.set_line_width(s * 0.3);
    ctx.set_line_cap("round");

    // S-curved body
    ctx.begin_path();
    ctx.move_to(0.0, -s);
    ctx.quadratic_curve_to(s * 0.5, -s * 0.5, 0.0, 0.0);
    ctx.quadratic_curve_to(-s * 0.3, s * 0.5, 0.0, s);
    ctx.stroke();

    dot(ctx, 0.0, -s * 0.8, s * 0.3);

    let fin_wave = (now_ms * 0.01 + c.phase).sin() * 0.1;
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for i in 0..5 {
        let y = -s * 0.5 + i as f64 * s * 0.3;
        let x = (i as f64 + fin_wave).sin() * s * 0.2;
        ctx.move_to(0.0, y);
        ctx.line_to(x, y);
    }
    ctx.stroke();
}

fn draw_starfish(ctx: &CanvasRenderingContext2d, c: &Creature) {
    let s = c.size;
    ctx.rotate(c.angle).ok();
    ctx.set_fill_style_str(&c.color.css());
    ctx.begin_path();
    for i in 0..5 {
        let angle = (i as f64 / 5.0) * PI * 2.0;
        let (x, y) = (angle.cos() * s, angle.sin() * s);
        if i == 0 {
            ctx.move_to(x * 0.3, y * 0.3);
        }
        ctx.line_to(x, y);
        let inner = angle + PI / 5.0;
        ctx.line_to(inner.cos() * s * 0.3, inner.sin() * s * 0.3);
    }
    ctx.close_path();
    ctx.fill();
    dot(ctx, 0.0, 0.0, s * 0.2);

    ctx.set_fill_style_str(&c.color.css_alpha(0.5));
    for i in 0..5 {
        let angle = (i as f64 / 5.0) * PI * 2.0;
        dot(ctx, angle.cos() * s * 0.5, angle.sin() * s * 0.5, s * 0.05);
    }
}

fn draw_treasure(ctx: &CanvasRenderingContext2d, c: &Creature, now_ms: f64) {
    let s = c.size;
    ctx.set_fill_style_str("hsl(25, 60%, 40%)");
    ctx.fill_rect(-s / 2.0, -s / 3.0, s, s / 1.5);
    ctx.set_fill_style_str("hsl(25, 60%, 35%)");
    ctx.fill_rect(-s / 2.0, -s / 2.0, s, s / 3.0);

    // coins glint on part of the cycle
    if (now_ms * 0.003 + c.phase).sin() > 0.5 {
        ctx.set_fill_style_str(&c.color.css());
        for i in 0..3 {
            dot(ctx, -s / 3.0 + i as f64 * s / 3.0, -s / 4.0, s / 8.0);
        }
    }

    ctx.set_fill_style_str("hsl(45, 80%, 60%)");
    ctx.fill_rect(-s / 8.0, -s / 6.0, s / 4.0, s / 6.0);
}

fn draw_seaweed(ctx: &CanvasRenderingContext2d, c: &Creature, now_ms: f64) {
    let s = c.size;
    let sway = (now_ms * c.wiggle + c.phase).sin() * 15.0;
    ctx.set_stroke_style_str(&c.color.css());
    ctx.set_line_width(s / 8.0);
    ctx.set_line_cap("round");
    let leaf_color = c.color.css_alpha(0.7);

    for frond in 0..3 {
        let root_x = frond as f64 * s / 4.0 - s / 3.0;
        ctx.begin_path();
        ctx.move_to(root_x, 0.0);
        for segment in 0..5 {
            let x = root_x + (segment as f64 + sway / 10.0).sin() * (sway / 2.0);
            ctx.line_to(x, -(segment as f64) * s / 5.0);
        }
        ctx.stroke();

        ctx.set_fill_style_str(&leaf_color);
        for leaf in 1..4 {
            let lx = root_x + (leaf as f64 + sway / 10.0).sin() * (sway / 2.0);
            let ly = -(leaf as f64) * s / 5.0;
            ellipse(ctx, lx + s / 12.0, ly, s / 12.0, s / 20.0, PI / 4.0);
        }
    }
}
