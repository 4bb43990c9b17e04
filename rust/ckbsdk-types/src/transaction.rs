//! Transactions and their witnesses.

use ckbsdk_molecule::{Builder, Entity, table};

use crate::cell::{
    CellDepVec, CellDepVecReader, CellInputVec, CellInputVecReader, CellOutputVec,
    CellOutputVecReader,
};
use crate::primitives::{
    Byte32Vec, Byte32VecReader, Bytes, BytesOpt, BytesOptReader, BytesVec, BytesVecReader,
    Uint32, Uint32Reader,
};

/// Length of a secp256k1 recoverable signature.
pub const SECP256K1_SIGNATURE_SIZE: usize = 65;

table!(
    /// The witness layout understood by the standard lock scripts.
    WitnessArgs,
    WitnessArgsReader,
    WitnessArgsBuilder {
        0 => lock: BytesOpt / BytesOptReader,
        1 => input_type: BytesOpt / BytesOptReader,
        2 => output_type: BytesOpt / BytesOptReader,
    }
);
table!(
    /// The part of a transaction covered by its hash.
    RawTransaction,
    RawTransactionReader,
    RawTransactionBuilder {
        0 => version: Uint32 / Uint32Reader,
        1 => cell_deps: CellDepVec / CellDepVecReader,
        2 => header_deps: Byte32Vec / Byte32VecReader,
        3 => inputs: CellInputVec / CellInputVecReader,
        4 => outputs: CellOutputVec / CellOutputVecReader,
        5 => outputs_data: BytesVec / BytesVecReader,
    }
);
table!(
    Transaction,
    TransactionReader,
    TransactionBuilder {
        0 => raw: RawTransaction / RawTransactionReader,
        1 => witnesses: BytesVec / BytesVecReader,
    }
);

impl WitnessArgs {
    /// A witness whose `lock` is `len` zero bytes, reserving room for a signature
    /// that is filled in after the transaction hash is known.
    pub fn lock_placeholder(len: usize) -> WitnessArgs {
        WitnessArgs::new_builder()
            .lock(Bytes::from(vec![0u8; len]).into())
            .build()
    }

    /// [`WitnessArgs::lock_placeholder`] sized for a secp256k1 signature.
    pub fn secp256k1_placeholder() -> WitnessArgs {
        Self::lock_placeholder(SECP256K1_SIGNATURE_SIZE)
    }
}

impl From<WitnessArgs> for Bytes {
    fn from(value: WitnessArgs) -> Self {
        Bytes::from(value.as_slice())
    }
}
