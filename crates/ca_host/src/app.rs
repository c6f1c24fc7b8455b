use ca_analysis::{AnalyteTable, Averaging, ColorSamplePipeline, DisplayMapping, SampleBitmap};
use ca_app::selection::{self as core_selection, RectI32};
use ca_app::{Action, AppModel};
use ca_host_protocol::Command;
use ca_rendering::RenderList;
use ca_settings::Settings;
use ca_ui::{
    SelectionOverlayStyle, ViewVisibility, build_selection_overlay_render_list_with_style,
    margin_band_item,
};
use image::{RgbImage, imageops};

use crate::capture::CaptureSource;
use crate::command_executor::CommandExecutor;
use crate::core_bridge;
use crate::error::HostError;
use crate::raster::RasterBackend;

/// What the photo area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Empty,
    CapturedPhoto,
    ExtractedRegion,
}

/// Host-side view state, as a headless front end would render it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub visibility: ViewVisibility,
    pub preview: Preview,
    pub result_text: Option<String>,
    /// Every notification raised so far, oldest first.
    pub notifications: Vec<String>,
    overlay: RectI32,
    redraw_count: usize,
}

impl ViewState {
    /// Rectangle the selection surface last painted.
    pub fn overlay(&self) -> RectI32 {
        self.overlay
    }

    /// Number of surface repaints requested.
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }

    pub(crate) fn set_overlay(&mut self, rect: RectI32) {
        self.overlay = rect;
        self.redraw_count += 1;
    }
}

/// Application host: owns the core model, the sample bitmap and the capture facility.
pub struct App {
    core: AppModel,
    settings: Settings,
    table: AnalyteTable,
    mapping: DisplayMapping,
    averaging: Averaging,
    capture: Box<dyn CaptureSource>,
    bitmap: Option<SampleBitmap>,
    extracted: Option<SampleBitmap>,
    view: ViewState,
}

impl App {
    pub fn new(settings: Settings, capture: Box<dyn CaptureSource>) -> Self {
        let table = settings.analyte_table();
        let mapping = settings.display_mapping();
        let averaging = settings.averaging;
        log::debug!(
            "Host ready: {} analytes, margin {}, {:?} averaging",
            table.len(),
            mapping.margin_height,
            averaging
        );
        Self {
            core: AppModel::new(),
            settings,
            table,
            mapping,
            averaging,
            capture,
            bitmap: None,
            extracted: None,
            view: ViewState::default(),
        }
    }

    /// Handle one user action and everything it triggers.
    pub fn handle(&mut self, action: Action) {
        self.execute_command_chain(vec![Command::Core(action)]);
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.handle(Action::Selection(core_selection::Action::down(x, y)));
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.handle(Action::Selection(core_selection::Action::move_to(x, y)));
    }

    pub fn pointer_up(&mut self, x: i32, y: i32) {
        self.handle(Action::Selection(core_selection::Action::up(x, y)));
    }

    pub fn core(&self) -> &AppModel {
        &self.core
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn bitmap(&self) -> Option<&SampleBitmap> {
        self.bitmap.as_ref()
    }

    pub fn extracted_region(&self) -> Option<&SampleBitmap> {
        self.extracted.as_ref()
    }

    pub fn pipeline(&self) -> ColorSamplePipeline<'_> {
        ColorSamplePipeline::new(&self.table, self.mapping, self.averaging)
    }

    /// Outline to paint over the photo, styled from settings.
    pub fn overlay_render_list(&self) -> Option<RenderList> {
        let style =
            SelectionOverlayStyle::from_rgb8(self.settings.stroke_color, self.settings.stroke_width);
        build_selection_overlay_render_list_with_style(
            self.view.overlay,
            self.view.visibility.selection_surface,
            &style,
        )
    }

    /// Paint the selection surface: margin band, photo, then the current outline.
    ///
    /// `None` until a photo has been captured.
    pub fn render_surface(&self) -> Option<RgbImage> {
        let bitmap = self.bitmap.as_ref()?;
        let margin = self.mapping.margin_height.max(0);
        let mut canvas = RgbImage::new(bitmap.width(), bitmap.height() + margin as u32);
        imageops::replace(&mut canvas, bitmap.as_image(), 0, margin as i64);

        let mut list = self.overlay_render_list().unwrap_or_default();
        if let Some(band) = margin_band_item(bitmap.width(), margin) {
            list.submit(band);
        }

        let mut backend = RasterBackend::new(canvas);
        match list.execute(&mut backend) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        Some(backend.into_image())
    }

    pub(crate) fn dispatch_core_action(&mut self, action: Action) -> Vec<Command> {
        let before = self.core.stage();
        let commands = core_bridge::dispatch(&mut self.core, action);
        if self.core.stage() != before {
            log::info!("Stage {:?} -> {:?}", before, self.core.stage());
        }
        commands
    }

    pub(crate) fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub(crate) fn capture_source_mut(&mut self) -> &mut dyn CaptureSource {
        self.capture.as_mut()
    }

    pub(crate) fn working_resolution(&self) -> (u32, u32) {
        self.settings.working_resolution()
    }

    pub(crate) fn install_bitmap(&mut self, bitmap: SampleBitmap) {
        self.bitmap = Some(bitmap);
        self.extracted = None;
        self.view.preview = Preview::CapturedPhoto;
    }

    /// Crop the display selection out of the sample bitmap. Leaves all state untouched on error.
    pub(crate) fn extract_region(&mut self, selection: RectI32) -> Result<(), HostError> {
        let bitmap = self.bitmap.as_ref().ok_or(HostError::NoBitmapToCrop)?;
        let region = self.pipeline().extract(bitmap, selection)?;
        log::info!(
            "Extracted {}x{} region",
            region.width(),
            region.height()
        );
        self.extracted = Some(region);
        Ok(())
    }

    /// Formatted result text for the extracted region.
    pub(crate) fn analyze_region(&self, analyte: Option<&str>) -> Result<String, HostError> {
        let name = analyte.ok_or(HostError::NoAnalyteSelected)?;
        let region = self.extracted.as_ref().ok_or(HostError::NoBitmapToCrop)?;
        let report = self.pipeline().analyze_region(region, name)?;
        log::info!("{} = {}", report.analyte, report.value);
        Ok(report.text)
    }

    pub(crate) fn release_bitmap(&mut self) {
        self.bitmap = None;
        self.extracted = None;
        self.view.preview = Preview::Empty;
        self.view.result_text = None;
    }
}
