//! Perspective 3D view of the simulated devices.
//!
//! Device A rides the ideal circle and carries two arrows showing the
//! direction of the (gravity-compensated) acceleration and of the angular
//! rate reported by the latest sample. Device B hovers above the centre and
//! spins a fixed amount per presented frame. Everything is drawn with the
//! egui painter; scene Y is up.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};
use nalgebra::{Isometry3, Perspective3, Point3, Rotation3, Vector3};

use crate::simulation::Trajectory;
use crate::sink::RenderSink;
use crate::types::{TickFrame, GRAVITY};

const CAMERA_EYE: [f64; 3] = [0.0, 40.0, 40.0];
const FIELD_OF_VIEW_DEG: f64 = 75.0;
const Z_NEAR: f64 = 0.1;
const Z_FAR: f64 = 1000.0;

const GRID_SIZE: i32 = 30;
const GRID_Y: f64 = -5.0;
const AXES_LENGTH: f64 = 8.0;
const CUBE_HALF_EDGE: f64 = 1.0;
const ARROW_LENGTH: f64 = 5.0;

// 设备 B 每帧的自转增量 (rad)
const SPIN_STEP: [f64; 3] = [0.15, 0.25, 0.1];
const HOVER_BASE: f64 = 5.0;
const HOVER_AMPLITUDE: f64 = 2.0;
const HOVER_FREQUENCY: f64 = 2.0;

const BACKGROUND: Color32 = Color32::from_rgb(241, 245, 249);
const GRID_COLOR: Color32 = Color32::from_rgb(226, 232, 240);
const GRID_CENTER_COLOR: Color32 = Color32::from_rgb(203, 213, 225);
const DEVICE_A_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const DEVICE_B_COLOR: Color32 = Color32::from_rgb(244, 63, 94);
const ACC_ARROW_COLOR: Color32 = Color32::from_rgb(225, 29, 72);
const GYRO_ARROW_COLOR: Color32 = Color32::from_rgb(124, 58, 237);
const TRAJECTORY_COLOR: Color32 = Color32::from_rgb(5, 150, 105);

/// Fixed perspective camera looking at the origin.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    view: Isometry3<f64>,
    fovy: f64,
}

impl Default for SceneCamera {
    fn default() -> Self {
        let eye = Point3::from(CAMERA_EYE);
        let view = Isometry3::look_at_rh(&eye, &Point3::origin(), &Vector3::y());
        Self {
            view,
            fovy: FIELD_OF_VIEW_DEG.to_radians(),
        }
    }
}

impl SceneCamera {
    /// 将世界坐标投影到屏幕，视口为空或点在相机后方时返回 None
    pub fn project(&self, point: [f64; 3], rect: Rect) -> Option<Pos2> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }

        let in_view = self.view.transform_point(&Point3::from(point));
        // 右手系相机朝 -Z 方向看
        if in_view.z > -Z_NEAR {
            return None;
        }

        let aspect = (rect.width() / rect.height()) as f64;
        let projection = Perspective3::new(aspect, self.fovy, Z_NEAR, Z_FAR);
        let ndc = projection.project_point(&in_view);

        let center = rect.center();
        Some(Pos2::new(
            center.x + ndc.x as f32 * rect.width() / 2.0,
            center.y - ndc.y as f32 * rect.height() / 2.0,
        ))
    }

    /// 视图空间深度，越大越远
    fn depth(&self, point: [f64; 3]) -> f64 {
        -self.view.transform_point(&Point3::from(point)).z
    }
}

/// 3D scene sink. Holds the last frame and Device B's accumulated spin.
#[derive(Debug, Default)]
pub struct ScenePlot {
    camera: SceneCamera,
    latest: Option<TickFrame>,
    spin: [f64; 3],
}

impl RenderSink for ScenePlot {
    fn present(&mut self, frame: &TickFrame) {
        self.latest = Some(*frame);
        for (angle, step) in self.spin.iter_mut().zip(SPIN_STEP) {
            *angle += step;
        }
    }

    fn clear(&mut self) {
        self.latest = None;
        self.spin = [0.0; 3];
    }
}

impl ScenePlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin(&self) -> [f64; 3] {
        self.spin
    }

    pub fn ui(&self, ui: &mut egui::Ui, trajectory: &Trajectory, height: f32) {
        let size = egui::vec2(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        painter.rect_filled(rect, 8.0, BACKGROUND);
        self.draw_grid(&painter, rect);
        self.draw_axes(&painter, rect);
        self.draw_trajectory(&painter, rect, trajectory);

        let time = self.latest.map(|f| f.sample.time).unwrap_or(0.0);
        let hover = [0.0, HOVER_BASE + (time * HOVER_FREQUENCY).sin() * HOVER_AMPLITUDE, 0.0];
        let spin = Rotation3::from_euler_angles(self.spin[0], self.spin[1], self.spin[2]);
        self.draw_cube(&painter, rect, hover, spin, DEVICE_B_COLOR);

        if let Some(frame) = &self.latest {
            let heading = Rotation3::from_axis_angle(&Vector3::y_axis(), frame.heading);
            self.draw_cube(&painter, rect, frame.position, heading, DEVICE_A_COLOR);

            let s = &frame.sample;
            self.draw_arrow(
                &painter,
                rect,
                frame.position,
                Vector3::new(s.acc_x, s.acc_z - GRAVITY, s.acc_y),
                ACC_ARROW_COLOR,
            );
            self.draw_arrow(
                &painter,
                rect,
                frame.position,
                Vector3::new(s.gyro_x, s.gyro_z, s.gyro_y),
                GYRO_ARROW_COLOR,
            );
        }

        self.draw_legend(&painter, rect);
    }

    fn segment(&self, painter: &egui::Painter, rect: Rect, a: [f64; 3], b: [f64; 3], stroke: Stroke) {
        if let (Some(pa), Some(pb)) = (self.camera.project(a, rect), self.camera.project(b, rect)) {
            painter.line_segment([pa, pb], stroke);
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: Rect) {
        let extent = GRID_SIZE as f64;
        for i in -GRID_SIZE..=GRID_SIZE {
            let offset = i as f64;
            let color = if i == 0 { GRID_CENTER_COLOR } else { GRID_COLOR };
            let stroke = Stroke::new(1.0, color);
            self.segment(painter, rect, [offset, GRID_Y, -extent], [offset, GRID_Y, extent], stroke);
            self.segment(painter, rect, [-extent, GRID_Y, offset], [extent, GRID_Y, offset], stroke);
        }
    }

    fn draw_axes(&self, painter: &egui::Painter, rect: Rect) {
        let origin = [0.0, 0.0, 0.0];
        let axes = [
            ([AXES_LENGTH, 0.0, 0.0], Color32::from_rgb(239, 68, 68)),
            ([0.0, AXES_LENGTH, 0.0], Color32::from_rgb(34, 197, 94)),
            ([0.0, 0.0, AXES_LENGTH], Color32::from_rgb(59, 130, 246)),
        ];
        for (end, color) in axes {
            self.segment(painter, rect, origin, end, Stroke::new(2.0, color));
        }
    }

    fn draw_trajectory(&self, painter: &egui::Painter, rect: Rect, trajectory: &Trajectory) {
        let points: Vec<Pos2> = trajectory
            .iter()
            .filter_map(|p| self.camera.project(*p, rect))
            .collect();
        if points.len() >= 2 {
            painter.add(Shape::line(points, Stroke::new(2.0, TRAJECTORY_COLOR)));
        }
    }

    fn draw_cube(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        center: [f64; 3],
        rotation: Rotation3<f64>,
        color: Color32,
    ) {
        let corners = cube_corners(center, rotation);

        // 按深度从远到近绘制各面
        let mut faces: Vec<(f64, [usize; 4])> = CUBE_FACES
            .iter()
            .map(|face| {
                let depth = face.iter().map(|&i| self.camera.depth(corners[i])).sum::<f64>() / 4.0;
                (depth, *face)
            })
            .collect();
        faces.sort_by(|a, b| b.0.total_cmp(&a.0));

        let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 200);
        for (_, face) in faces {
            let points: Option<Vec<Pos2>> = face
                .iter()
                .map(|&i| self.camera.project(corners[i], rect))
                .collect();
            if let Some(points) = points {
                painter.add(Shape::convex_polygon(points, fill, Stroke::new(1.0, Color32::WHITE)));
            }
        }
    }

    fn draw_arrow(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        origin: [f64; 3],
        direction: Vector3<f64>,
        color: Color32,
    ) {
        let Some(tip) = arrow_tip(origin, direction) else {
            return;
        };
        let (Some(from), Some(to)) = (self.camera.project(origin, rect), self.camera.project(tip, rect)) else {
            return;
        };
        painter.line_segment([from, to], Stroke::new(3.0, color));
        painter.circle_filled(to, 4.0, color);
    }

    fn draw_legend(&self, painter: &egui::Painter, rect: Rect) {
        let font = FontId::proportional(13.0);
        let origin = rect.left_top() + egui::vec2(12.0, 10.0);
        let entries = [
            ("Device A: circular patrol", DEVICE_A_COLOR),
            ("Device B: fast self-test", DEVICE_B_COLOR),
            ("Acceleration", ACC_ARROW_COLOR),
            ("Angular rate", GYRO_ARROW_COLOR),
            ("Trajectory", TRAJECTORY_COLOR),
        ];
        for (i, (label, color)) in entries.into_iter().enumerate() {
            let row = origin + egui::vec2(0.0, i as f32 * 18.0);
            painter.circle_filled(row + egui::vec2(5.0, 7.0), 5.0, color);
            painter.text(row + egui::vec2(16.0, 0.0), Align2::LEFT_TOP, label, font.clone(), Color32::DARK_GRAY);
        }
    }
}

const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 6, 7, 5],
    [0, 4, 5, 1],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 5, 7, 3],
];

fn cube_corners(center: [f64; 3], rotation: Rotation3<f64>) -> [[f64; 3]; 8] {
    let c = Vector3::from(center);
    let h = CUBE_HALF_EDGE;
    let mut corners = [[0.0; 3]; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let local = Vector3::new(
            if i & 4 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 1 == 0 { -h } else { h },
        );
        let world = c + rotation * local;
        *corner = [world.x, world.y, world.z];
    }
    corners
}

/// 固定长度箭头的终点，零向量没有方向
fn arrow_tip(origin: [f64; 3], direction: Vector3<f64>) -> Option<[f64; 3]> {
    let unit = direction.try_normalize(1e-9)?;
    let tip = Vector3::from(origin) + unit * ARROW_LENGTH;
    Some([tip.x, tip.y, tip.z])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImuSample, MotionState};

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 0.0), egui::vec2(800.0, 400.0))
    }

    fn frame() -> TickFrame {
        TickFrame {
            sample: ImuSample::new(0.0, [-3.75, 0.0, 9.8], [0.0, 5.0, 28.6]),
            state: MotionState::NormalMove,
            position: [15.0, 0.0, 0.0],
            heading: 0.0,
        }
    }

    #[test]
    fn test_origin_projects_to_viewport_center() {
        let camera = SceneCamera::default();
        let p = camera.project([0.0, 0.0, 0.0], viewport()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_up_projects_above_center() {
        let camera = SceneCamera::default();
        let p = camera.project([0.0, 5.0, 0.0], viewport()).unwrap();
        assert!(p.y < 200.0);
    }

    #[test]
    fn test_zero_viewport_is_noop() {
        let camera = SceneCamera::default();
        let empty = Rect::from_min_size(Pos2::new(0.0, 0.0), egui::vec2(0.0, 0.0));
        assert!(camera.project([0.0, 0.0, 0.0], empty).is_none());
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let camera = SceneCamera::default();
        assert!(camera.project([0.0, 80.0, 80.0], viewport()).is_none());
    }

    #[test]
    fn test_arrow_has_fixed_length() {
        let tip = arrow_tip([15.0, 0.0, 0.0], Vector3::new(-3.75, 0.0, 0.0)).unwrap();
        assert!((tip[0] - 10.0).abs() < 1e-9);
        assert!(arrow_tip([0.0, 0.0, 0.0], Vector3::zeros()).is_none());
    }

    #[test]
    fn test_cube_corners_are_centered() {
        let corners = cube_corners([1.0, 2.0, 3.0], Rotation3::identity());
        let sum = corners.iter().fold([0.0; 3], |acc, c| [acc[0] + c[0], acc[1] + c[1], acc[2] + c[2]]);
        assert!((sum[0] / 8.0 - 1.0).abs() < 1e-12);
        assert!((sum[1] / 8.0 - 2.0).abs() < 1e-12);
        assert!((sum[2] / 8.0 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_spin_accumulates_and_resets() {
        let mut scene = ScenePlot::new();
        scene.present(&frame());
        scene.present(&frame());
        let spin = scene.spin();
        assert!((spin[0] - 0.3).abs() < 1e-12);
        assert!((spin[1] - 0.5).abs() < 1e-12);
        assert!((spin[2] - 0.2).abs() < 1e-12);

        scene.clear();
        assert_eq!(scene.spin(), [0.0; 3]);
    }
}
