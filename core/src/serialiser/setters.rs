//! serialiser/setters.rs
//! Named header setters. Each one is `add_header(fixed tag, typed value)`.
//!
//! Setters with a documented default also have a `*_default()` form.
//! External clock setters (0x61-0x67) fail with `PreconditionNotMet` until
//! `set_external_clock_used(true)` has been called.

use crate::constants::{defaults, tags};
use crate::serialiser::core::Serialiser;
use crate::traces::Sample;
use crate::types::Result;

impl<T: Sample> Serialiser<T> {
    // --- Trace layout ---

    /// Length in bytes of the per-trace extra data.
    pub fn set_cryptographic_data_length(&mut self, value: u16) -> Result<()> {
        self.add_header(tags::LENGTH_OF_CRYPTOGRAPHIC_DATA, &value)
    }

    pub fn set_cryptographic_data_length_default(&mut self) -> Result<()> {
        self.set_cryptographic_data_length(defaults::CRYPTOGRAPHIC_DATA_LENGTH)
    }

    pub fn set_title_space_per_trace(&mut self, value: u8) -> Result<()> {
        self.add_header(tags::TITLE_SPACE_PER_TRACE, &value)
    }

    pub fn set_title_space_per_trace_default(&mut self) -> Result<()> {
        self.set_title_space_per_trace(defaults::TITLE_SPACE_PER_TRACE)
    }

    pub fn set_trace_title(&mut self, value: &str) -> Result<()> {
        self.add_header(tags::TRACE_TITLE, value)
    }

    pub fn set_trace_title_default(&mut self) -> Result<()> {
        self.set_trace_title(defaults::TRACE_TITLE)
    }

    pub fn set_trace_description(&mut self, value: &str) -> Result<()> {
        self.add_header(tags::DESCRIPTION, value)
    }

    // --- Display ---

    pub fn set_axis_offset_x(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::AXIS_OFFSET_X, &value)
    }

    pub fn set_axis_offset_x_default(&mut self) -> Result<()> {
        self.set_axis_offset_x(defaults::AXIS_OFFSET_X)
    }

    pub fn set_axis_label_x(&mut self, value: &str) -> Result<()> {
        self.add_header(tags::AXIS_LABEL_X, value)
    }

    pub fn set_axis_label_y(&mut self, value: &str) -> Result<()> {
        self.add_header(tags::AXIS_LABEL_Y, value)
    }

    /// Time between samples on the X axis.
    pub fn set_axis_scale_x(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::AXIS_SCALE_X, &value)
    }

    pub fn set_axis_scale_x_default(&mut self) -> Result<()> {
        self.set_axis_scale_x(defaults::AXIS_SCALE_X)
    }

    pub fn set_axis_scale_y(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::AXIS_SCALE_Y, &value)
    }

    pub fn set_axis_scale_y_default(&mut self) -> Result<()> {
        self.set_axis_scale_y(defaults::AXIS_SCALE_Y)
    }

    /// Offset used when numbering traces for display.
    pub fn set_trace_offset(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::TRACE_OFFSET, &value)
    }

    pub fn set_trace_offset_default(&mut self) -> Result<()> {
        self.set_trace_offset(defaults::TRACE_OFFSET)
    }

    pub fn set_logarithmic_scale(&mut self, value: u8) -> Result<()> {
        self.add_header(tags::LOGARITHMIC_SCALE, &value)
    }

    pub fn set_logarithmic_scale_default(&mut self) -> Result<()> {
        self.set_logarithmic_scale(defaults::LOGARITHMIC_SCALE)
    }

    // --- Scope and filter ---

    pub fn set_scope_range(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::SCOPE_RANGE, &value)
    }

    pub fn set_scope_range_default(&mut self) -> Result<()> {
        self.set_scope_range(defaults::SCOPE_RANGE)
    }

    pub fn set_scope_coupling(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::SCOPE_COUPLING, &value)
    }

    pub fn set_scope_coupling_default(&mut self) -> Result<()> {
        self.set_scope_coupling(defaults::SCOPE_COUPLING)
    }

    pub fn set_scope_offset(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::SCOPE_OFFSET, &value)
    }

    pub fn set_scope_offset_default(&mut self) -> Result<()> {
        self.set_scope_offset(defaults::SCOPE_OFFSET)
    }

    pub fn set_scope_input_impedance(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::SCOPE_INPUT_IMPEDANCE, &value)
    }

    pub fn set_scope_input_impedance_default(&mut self) -> Result<()> {
        self.set_scope_input_impedance(defaults::SCOPE_INPUT_IMPEDANCE)
    }

    /// Free-form identifier of the capturing scope.
    pub fn set_scope_id(&mut self, value: &str) -> Result<()> {
        self.add_header(tags::SCOPE_ID, value)
    }

    pub fn set_filter_type(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::FILTER_TYPE, &value)
    }

    pub fn set_filter_type_default(&mut self) -> Result<()> {
        self.set_filter_type(defaults::FILTER_TYPE)
    }

    pub fn set_filter_frequency(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::FILTER_FREQUENCY, &value)
    }

    pub fn set_filter_frequency_default(&mut self) -> Result<()> {
        self.set_filter_frequency(defaults::FILTER_FREQUENCY)
    }

    pub fn set_filter_range(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::FILTER_RANGE, &value)
    }

    pub fn set_filter_range_default(&mut self) -> Result<()> {
        self.set_filter_range(defaults::FILTER_RANGE)
    }

    // --- External clock ---

    /// Gate for every other external clock header.
    pub fn set_external_clock_used(&mut self, value: bool) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_USED, &value)
    }

    pub fn set_external_clock_used_default(&mut self) -> Result<()> {
        self.set_external_clock_used(defaults::EXTERNAL_CLOCK_USED)
    }

    pub fn set_external_clock_threshold(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_THRESHOLD, &value)
    }

    pub fn set_external_clock_threshold_default(&mut self) -> Result<()> {
        self.set_external_clock_threshold(defaults::EXTERNAL_CLOCK_THRESHOLD)
    }

    pub fn set_external_clock_multiplier(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_MULTIPLIER, &value)
    }

    pub fn set_external_clock_multiplier_default(&mut self) -> Result<()> {
        self.set_external_clock_multiplier(defaults::EXTERNAL_CLOCK_MULTIPLIER)
    }

    pub fn set_external_clock_phase_shift(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_PHASE_SHIFT, &value)
    }

    pub fn set_external_clock_phase_shift_default(&mut self) -> Result<()> {
        self.set_external_clock_phase_shift(defaults::EXTERNAL_CLOCK_PHASE_SHIFT)
    }

    /// Requires the resampler to be enabled first.
    pub fn set_external_clock_resampler_mask(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_RESAMPLER_MASK, &value)
    }

    pub fn set_external_clock_resampler_mask_default(&mut self) -> Result<()> {
        self.set_external_clock_resampler_mask(defaults::EXTERNAL_CLOCK_RESAMPLER_MASK)
    }

    pub fn set_external_clock_resampler_enabled(&mut self, value: bool) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_RESAMPLER_ENABLED, &value)
    }

    pub fn set_external_clock_resampler_enabled_default(&mut self) -> Result<()> {
        self.set_external_clock_resampler_enabled(defaults::EXTERNAL_CLOCK_RESAMPLER_ENABLED)
    }

    pub fn set_external_clock_frequency(&mut self, value: f32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_FREQUENCY, &value)
    }

    pub fn set_external_clock_frequency_default(&mut self) -> Result<()> {
        self.set_external_clock_frequency(defaults::EXTERNAL_CLOCK_FREQUENCY)
    }

    pub fn set_external_clock_time_base(&mut self, value: u32) -> Result<()> {
        self.add_header(tags::EXTERNAL_CLOCK_TIME_BASE, &value)
    }

    pub fn set_external_clock_time_base_default(&mut self) -> Result<()> {
        self.set_external_clock_time_base(defaults::EXTERNAL_CLOCK_TIME_BASE)
    }
}
