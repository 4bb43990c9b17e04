//! Options: an empty encoding is `None`, anything else is the inner value's encoding.

use ckbsdk_common::Result;

use crate::table::VerifyFn;

pub fn verify_option(slice: &[u8], compatible: bool, verify_inner: VerifyFn) -> Result<()> {
    if slice.is_empty() {
        Ok(())
    } else {
        verify_inner(slice, compatible)
    }
}
