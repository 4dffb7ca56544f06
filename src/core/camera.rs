//! 2D-Kamera für Pan und Zoom im Map-Frame.
//!
//! Welt-Y zeigt nach oben, Screen-Y nach unten. Der Zoom wird als
//! Meter pro Screen-Pixel geführt.

use glam::DVec2;

use super::WorldBounds;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Weltposition in der Viewport-Mitte
    pub center: DVec2,
    /// Meter pro Screen-Pixel
    pub meters_per_pixel: f64,
}

impl Camera2D {
    /// Kleinster Maßstab (stärkster Zoom).
    pub const MIN_METERS_PER_PIXEL: f64 = 1e-4;
    /// Größter Maßstab.
    pub const MAX_METERS_PER_PIXEL: f64 = 1e3;
    /// Rand beim Einpassen eines Bereichs (Anteil der Viewport-Größe).
    pub const FIT_MARGIN: f64 = 0.05;

    /// Erstellt eine Kamera im Ursprung mit 5 cm/Pixel.
    pub fn new() -> Self {
        Self {
            center: DVec2::ZERO,
            meters_per_pixel: 0.05,
        }
    }

    /// Verschiebt die Kamera um ein Welt-Delta.
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Zoomt um `factor` (> 1 = hinein) und hält `focus` an derselben Screen-Position.
    pub fn zoom_towards(&mut self, factor: f64, focus: Option<DVec2>) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let old = self.meters_per_pixel;
        self.meters_per_pixel = (old / factor).clamp(
            Self::MIN_METERS_PER_PIXEL,
            Self::MAX_METERS_PER_PIXEL,
        );
        if let Some(focus) = focus {
            let ratio = self.meters_per_pixel / old;
            self.center = focus + (self.center - focus) * ratio;
        }
    }

    /// Screen-Pixel (relativ zur Viewport-Ecke oben links) → Weltkoordinate.
    pub fn screen_to_world(&self, screen: DVec2, viewport_size: DVec2) -> DVec2 {
        let offset = screen - viewport_size * 0.5;
        DVec2::new(
            self.center.x + offset.x * self.meters_per_pixel,
            self.center.y - offset.y * self.meters_per_pixel,
        )
    }

    /// Weltkoordinate → Screen-Pixel (relativ zur Viewport-Ecke oben links).
    pub fn world_to_screen(&self, world: DVec2, viewport_size: DVec2) -> DVec2 {
        let delta = (world - self.center) / self.meters_per_pixel;
        DVec2::new(delta.x, -delta.y) + viewport_size * 0.5
    }

    /// Passt einen Weltbereich mit Rand in den Viewport ein.
    pub fn fit_bounds(&mut self, bounds: &WorldBounds, viewport_size: DVec2) {
        self.center = bounds.center();
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return;
        }
        let usable = viewport_size * (1.0 - 2.0 * Self::FIT_MARGIN);
        let scale = (bounds.width() / usable.x).max(bounds.height() / usable.y);
        if scale > 0.0 && scale.is_finite() {
            self.meters_per_pixel =
                scale.clamp(Self::MIN_METERS_PER_PIXEL, Self::MAX_METERS_PER_PIXEL);
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn test_screen_center_maps_to_camera_center() {
        let mut camera = Camera2D::new();
        camera.center = DVec2::new(3.0, -2.0);
        let world = camera.screen_to_world(VIEWPORT * 0.5, VIEWPORT);
        assert_relative_eq!(world.x, 3.0);
        assert_relative_eq!(world.y, -2.0);
    }

    #[test]
    fn test_screen_y_points_down() {
        let camera = Camera2D::new();
        let above = camera.screen_to_world(DVec2::new(400.0, 100.0), VIEWPORT);
        assert!(above.y > 0.0);
    }

    #[test]
    fn test_world_screen_roundtrip() {
        let mut camera = Camera2D::new();
        camera.center = DVec2::new(-7.0, 12.5);
        camera.meters_per_pixel = 0.2;
        let world = DVec2::new(1.25, 3.5);
        let back = camera.screen_to_world(camera.world_to_screen(world, VIEWPORT), VIEWPORT);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_keeps_focus_fixed() {
        let mut camera = Camera2D::new();
        let focus_screen = DVec2::new(100.0, 450.0);
        let focus = camera.screen_to_world(focus_screen, VIEWPORT);

        camera.zoom_towards(2.0, Some(focus));

        assert_relative_eq!(camera.meters_per_pixel, 0.025);
        let after = camera.world_to_screen(focus, VIEWPORT);
        assert_relative_eq!(after.x, focus_screen.x, epsilon = 1e-9);
        assert_relative_eq!(after.y, focus_screen.y, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped_and_rejects_invalid_factor() {
        let mut camera = Camera2D::new();
        camera.zoom_towards(1e12, None);
        assert_relative_eq!(camera.meters_per_pixel, Camera2D::MIN_METERS_PER_PIXEL);

        camera.zoom_towards(0.0, None);
        camera.zoom_towards(f64::NAN, None);
        assert_relative_eq!(camera.meters_per_pixel, Camera2D::MIN_METERS_PER_PIXEL);
    }

    #[test]
    fn test_fit_bounds_uses_limiting_axis() {
        let mut camera = Camera2D::new();
        let bounds = WorldBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 72.0,
            max_y: 27.0,
        };
        camera.fit_bounds(&bounds, VIEWPORT);
        assert_relative_eq!(camera.center.x, 36.0);
        assert_relative_eq!(camera.center.y, 13.5);
        // Nutzbar 720x540 → X limitiert mit 0.1 m/px
        assert_relative_eq!(camera.meters_per_pixel, 0.1, epsilon = 1e-12);
    }
}
