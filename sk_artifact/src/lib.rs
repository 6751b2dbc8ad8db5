pub mod asset;
pub mod bone_frame;
pub mod catalog;
pub mod clip;
pub mod emission;
pub mod error;
pub mod file_header;
pub mod resource_type;

use lazy_static::lazy_static;

#[derive(Clone, Copy)]
pub enum EEndianType {
    Big,
    Little,
    Native,
}

lazy_static! {
    static ref DEFAULT_URL: url::Url =
        url::Url::parse("anim://local/empty").expect("A valid url.");
}

pub fn default_url() -> &'static url::Url {
    &DEFAULT_URL
}

pub fn build_asset_url(kind: &str, name: &str) -> url::Url {
    match url::Url::parse(&format!("anim://{}/{}", kind, name)) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("Fail to build url for `{}`, {}.", name, err);
            default_url().clone()
        }
    }
}
