//! Root signature: the binding layout a draw call expects
//!
//! Group 0 holds the constant buffer slots (filled by a descriptor heap).
//! Group 1 holds the static sampler, which the root signature owns and binds
//! itself.

use std::sync::Arc;

use trisample_core::{
    AddressMode, Filter, RootSignatureDesc, ShaderVisibility, CONSTANT_BUFFER_SLOTS,
};

/// Bind group index of the constant buffers
pub const CONSTANT_BUFFER_GROUP: u32 = 0;

/// Bind group index of the static sampler
pub const SAMPLER_GROUP: u32 = 1;

/// Pipeline layout plus static sampler
pub struct RootSignature {
    constant_buffer_layout: Arc<wgpu::BindGroupLayout>,
    pipeline_layout: wgpu::PipelineLayout,
    sampler_bind_group: wgpu::BindGroup,
}

impl RootSignature {
    /// Create the layouts and the static sampler
    pub fn new(device: &wgpu::Device, desc: &RootSignatureDesc) -> Self {
        let visibility = shader_stages(desc.constant_buffer_visibility);
        let entries: Vec<wgpu::BindGroupLayoutEntry> = (0..CONSTANT_BUFFER_SLOTS)
            .map(|slot| wgpu::BindGroupLayoutEntry {
                binding: slot,
                visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            })
            .collect();

        let constant_buffer_layout = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Constant Buffer Layout"),
                entries: &entries,
            },
        ));

        let sampler_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Static Sampler Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            }],
        });

        let sampler = device.create_sampler(&sampler_descriptor(desc));

        let sampler_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Static Sampler Bind Group"),
            layout: &sampler_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Sampler(&sampler),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Root Signature"),
            bind_group_layouts: &[&constant_buffer_layout, &sampler_layout],
            push_constant_ranges: &[],
        });

        Self {
            constant_buffer_layout,
            pipeline_layout,
            sampler_bind_group,
        }
    }

    pub fn constant_buffer_layout(&self) -> &Arc<wgpu::BindGroupLayout> {
        &self.constant_buffer_layout
    }

    pub fn pipeline_layout(&self) -> &wgpu::PipelineLayout {
        &self.pipeline_layout
    }

    pub fn sampler_bind_group(&self) -> &wgpu::BindGroup {
        &self.sampler_bind_group
    }
}

/// Sampler descriptor for the static sampler
fn sampler_descriptor(desc: &RootSignatureDesc) -> wgpu::SamplerDescriptor<'static> {
    let filter = filter_mode(desc.sampler.filter);
    wgpu::SamplerDescriptor {
        label: Some("Static Sampler"),
        address_mode_u: address_mode(desc.sampler.address_u),
        address_mode_v: address_mode(desc.sampler.address_v),
        address_mode_w: address_mode(desc.sampler.address_w),
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: filter,
        ..Default::default()
    }
}

fn filter_mode(filter: Filter) -> wgpu::FilterMode {
    match filter {
        Filter::Point => wgpu::FilterMode::Nearest,
        Filter::Linear => wgpu::FilterMode::Linear,
    }
}

fn address_mode(mode: AddressMode) -> wgpu::AddressMode {
    match mode {
        AddressMode::Wrap => wgpu::AddressMode::Repeat,
        AddressMode::Mirror => wgpu::AddressMode::MirrorRepeat,
        AddressMode::Clamp => wgpu::AddressMode::ClampToEdge,
    }
}

fn shader_stages(visibility: ShaderVisibility) -> wgpu::ShaderStages {
    let mut stages = wgpu::ShaderStages::NONE;
    if visibility.contains(ShaderVisibility::VERTEX) {
        stages |= wgpu::ShaderStages::VERTEX;
    }
    if visibility.contains(ShaderVisibility::FRAGMENT) {
        stages |= wgpu::ShaderStages::FRAGMENT;
    }
    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use trisample_core::SamplerDesc;

    #[test]
    fn test_default_sampler_is_trilinear_repeat() {
        let desc = sampler_descriptor(&RootSignatureDesc::default());
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.mipmap_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::Repeat);
        assert_eq!(desc.address_mode_w, wgpu::AddressMode::Repeat);
    }

    #[test]
    fn test_sampler_per_axis_modes() {
        let desc = RootSignatureDesc::with_sampler(SamplerDesc {
            filter: Filter::Point,
            address_u: AddressMode::Clamp,
            address_v: AddressMode::Mirror,
            address_w: AddressMode::Wrap,
        });
        let sampler = sampler_descriptor(&desc);
        assert_eq!(sampler.min_filter, wgpu::FilterMode::Nearest);
        assert_eq!(sampler.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(sampler.address_mode_v, wgpu::AddressMode::MirrorRepeat);
        assert_eq!(sampler.address_mode_w, wgpu::AddressMode::Repeat);
    }

    #[test]
    fn test_shader_stages_mapping() {
        assert_eq!(
            shader_stages(ShaderVisibility::ALL),
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT
        );
        assert_eq!(shader_stages(ShaderVisibility::VERTEX), wgpu::ShaderStages::VERTEX);
        assert_eq!(shader_stages(ShaderVisibility::empty()), wgpu::ShaderStages::NONE);
    }
}
