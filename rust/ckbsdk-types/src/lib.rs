//! Molecule schema types of the CKB client SDK: the primitive byte containers, scripts,
//! cells, transactions and the off-chain participant record.
//!
//! Every type comes as an owned entity (`Script`), a zero-copy reader (`ScriptReader`)
//! and a builder (`ScriptBuilder`); the codec operations live on the traits in
//! [`ckbsdk_molecule::prelude`].

pub mod cell;
pub mod offchain;
pub mod primitives;
pub mod script;
pub mod transaction;

pub use cell::{
    CellDep, CellDepBuilder, CellDepReader, CellDepVec, CellDepVecBuilder, CellDepVecReader,
    CellInput, CellInputBuilder, CellInputReader, CellInputVec, CellInputVecBuilder,
    CellInputVecReader, CellOutput, CellOutputBuilder, CellOutputReader, CellOutputVec,
    CellOutputVecBuilder, CellOutputVecReader, DepType, OutPoint, OutPointBuilder,
    OutPointReader,
};
pub use ckbsdk_molecule::prelude;
pub use offchain::{OffChainParticipant, OffChainParticipantBuilder, OffChainParticipantReader};
pub use primitives::{
    Byte, Byte32, Byte32Builder, Byte32Reader, Byte32Vec, Byte32VecBuilder, Byte32VecReader,
    ByteBuilder, ByteReader, Bytes, BytesBuilder, BytesOpt, BytesOptBuilder, BytesOptReader,
    BytesReader, BytesVec, BytesVecBuilder, BytesVecReader, SEC1EncodedPubKey,
    SEC1EncodedPubKeyBuilder, SEC1EncodedPubKeyReader, Uint32, Uint32Builder, Uint32Reader,
    Uint64, Uint64Builder, Uint64Reader,
};
pub use script::{
    Script, ScriptBuilder, ScriptHashType, ScriptOpt, ScriptOptBuilder, ScriptOptReader,
    ScriptReader,
};
pub use transaction::{
    RawTransaction, RawTransactionBuilder, RawTransactionReader, Transaction,
    TransactionBuilder, TransactionReader, WitnessArgs, WitnessArgsBuilder, WitnessArgsReader,
};
