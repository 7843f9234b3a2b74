//! Canvas rendering for the backdrops.
//!
//! Every frame starts from a cleared surface and draws in a fixed order so
//! later layers occlude earlier ones:
//! 1. Ambient glow or wave bands
//! 2. Ambient particles and stars
//! 3. Feathers and shooting stars

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::entities::{CosmicParticle, Feather, ShootingStar, Star};
use super::scene::{AngelScene, CosmicScene, Scene, StarflowScene};
use super::surface::SurfaceSize;
use super::theme::{Pulse, StarStyle, WaveStyle};

/// Paints a scene's current state.
pub trait Paint {
	fn paint(&self, ctx: &CanvasRenderingContext2d);
}

impl Paint for StarflowScene {
	fn paint(&self, ctx: &CanvasRenderingContext2d) {
		let size = self.size();
		clear(ctx, size);
		draw_trails(ctx, size, &self.trails, self.trail_phase());
		draw_stars(ctx, &self.stars, &self.star_style, 0.0);
		for star in &self.shooting_stars {
			draw_shooting_star(ctx, star, self.now);
		}
	}
}

impl Paint for CosmicScene {
	fn paint(&self, ctx: &CanvasRenderingContext2d) {
		let size = self.size();
		clear(ctx, size);
		draw_wave_bands(ctx, size, &self.waves, self.phase);
		for p in &self.particles {
			draw_cosmic_particle(ctx, p);
		}
		ctx.set_global_alpha(1.0);
	}
}

impl Paint for AngelScene {
	fn paint(&self, ctx: &CanvasRenderingContext2d) {
		let size = self.size();
		clear(ctx, size);
		draw_center_glow(ctx, size);
		draw_stars(ctx, &self.stars, &self.star_style, self.time);
		for feather in &self.feathers {
			draw_feather(ctx, feather, self.feather_style.barbs);
		}
	}
}

fn clear(ctx: &CanvasRenderingContext2d, size: SurfaceSize) {
	ctx.clear_rect(0.0, 0.0, size.width, size.height);
}

fn draw_center_glow(ctx: &CanvasRenderingContext2d, size: SurfaceSize) {
	if size.is_empty() {
		return;
	}
	let (cx, cy) = (size.width / 2.0, size.height / 2.0);
	let radius = size.width.min(size.height) * 0.4;

	let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.03)");
	let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, radius, 0.0, PI * 2.0);
	ctx.fill();
}

/// Filled sine bands rising from the bottom edge.
fn draw_wave_bands(
	ctx: &CanvasRenderingContext2d,
	size: SurfaceSize,
	style: &WaveStyle,
	phase: f64,
) {
	if size.is_empty() {
		return;
	}
	let amplitude = size.height * 0.05;

	for band in 0..style.bands {
		let base = size.height - size.height * 0.1 * band as f64;

		ctx.begin_path();
		ctx.move_to(0.0, size.height);
		let mut x = 0.0;
		while x < size.width {
			let offset = ((x / size.width) * 10.0 + phase + band as f64).sin() * amplitude;
			ctx.line_to(x, base + offset);
			x += style.step;
		}
		ctx.line_to(size.width, size.height);
		ctx.close_path();

		ctx.set_fill_style_str(&style.color.with_alpha(style.band_alpha(band)).to_css());
		ctx.fill();
	}
}

/// Thick, faint stroked sine trails spread over the height.
fn draw_trails(ctx: &CanvasRenderingContext2d, size: SurfaceSize, style: &WaveStyle, phase: f64) {
	if size.is_empty() {
		return;
	}

	for band in 0..style.bands {
		let i = band as f64;
		let base = i * size.height / style.bands as f64 + 50.0 * (phase + i).sin();

		ctx.begin_path();
		ctx.move_to(0.0, base);
		let mut x = 0.0;
		while x < size.width {
			let y = base + ((x / size.width) * PI * 4.0 + phase).sin() * 50.0;
			ctx.line_to(x, y);
			x += style.step;
		}

		ctx.set_stroke_style_str(&style.color.with_alpha(style.band_alpha(band)).to_css());
		ctx.set_line_width(50.0);
		ctx.stroke();
	}
}

fn draw_stars(ctx: &CanvasRenderingContext2d, stars: &[Star], style: &StarStyle, time: f64) {
	let pulse: Option<Pulse> = style.pulse;

	for star in stars {
		let color = star.color.to_css();
		ctx.set_global_alpha(star.display_opacity(pulse, time));
		ctx.set_fill_style_str(&color);
		ctx.set_shadow_color(&color);
		ctx.set_shadow_blur(star.size * style.glow);

		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.size, 0.0, PI * 2.0);
		ctx.fill();

		ctx.set_shadow_blur(0.0);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_cosmic_particle(ctx: &CanvasRenderingContext2d, p: &CosmicParticle) {
	ctx.set_global_alpha(p.alpha);
	ctx.set_fill_style_str(&p.color.to_css());
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_feather(ctx: &CanvasRenderingContext2d, feather: &Feather, barbs: usize) {
	let size = feather.size;

	ctx.save();
	let _ = ctx.translate(feather.x, feather.y);
	let _ = ctx.rotate(feather.rotation);

	ctx.set_global_alpha(feather.opacity);
	ctx.set_shadow_color("rgba(255, 255, 255, 0.5)");
	ctx.set_shadow_blur(5.0);

	// Shaft
	ctx.begin_path();
	ctx.move_to(0.0, -size);
	ctx.line_to(0.0, size);
	ctx.set_line_width(size / 10.0);
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
	ctx.stroke();

	let barb_length = size / 2.0;
	let barb_angle = PI / 3.0;
	let (dx, dy) = (barb_length * barb_angle.cos(), barb_length * barb_angle.sin());

	ctx.set_line_width(size / 20.0);
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
	for i in 0..barbs {
		let y = -size + size * 2.0 * i as f64 / barbs as f64;

		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(-dx, y + dy);
		ctx.move_to(0.0, y);
		ctx.line_to(dx, y + dy);
		ctx.stroke();
	}

	ctx.restore();
}

fn draw_shooting_star(ctx: &CanvasRenderingContext2d, star: &ShootingStar, now: f64) {
	if star.is_expired(now) {
		return;
	}
	let progress = star.progress(now);
	let opacity = star.fade(progress);
	let bright = star.is_bright();

	let (hx, hy) = star.head(progress);
	let (tx, ty) = star.tail(progress);

	let gradient = ctx.create_linear_gradient(hx, hy, tx, ty);
	let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", opacity));
	if bright {
		let _ = gradient.add_color_stop(0.1, &format!("rgba(200, 220, 255, {})", opacity * 0.8));
	}
	let _ = gradient.add_color_stop(0.3, &format!("rgba(120, 180, 255, {})", opacity * 0.6));
	let _ = gradient.add_color_stop(1.0, "rgba(70, 130, 240, 0)");

	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(if bright { 3.0 } else { 2.0 });
	ctx.set_global_alpha(opacity.min(1.0));

	ctx.begin_path();
	ctx.move_to(hx, hy);
	ctx.line_to(tx, ty);
	ctx.stroke();

	// Head
	ctx.begin_path();
	let _ = ctx.arc(hx, hy, if bright { 3.5 } else { 2.0 }, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", opacity.min(1.0)));
	ctx.set_shadow_blur(if bright { 15.0 } else { 10.0 });
	ctx.set_shadow_color(if bright { "#FFFFFF" } else { "#61DAFB" });
	ctx.fill();

	ctx.set_shadow_blur(0.0);
	ctx.set_global_alpha(1.0);
}
