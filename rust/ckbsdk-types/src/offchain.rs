//! Off-chain channel participant record.

use ckbsdk_molecule::table;

use crate::primitives::{SEC1EncodedPubKey, SEC1EncodedPubKeyReader, Uint64, Uint64Reader};
use crate::script::{Script, ScriptReader};

table!(
    /// A channel participant: the key it signs with, where payments to it go, the
    /// script that unlocks its funds and the smallest capacity it accepts per payment.
    OffChainParticipant,
    OffChainParticipantReader,
    OffChainParticipantBuilder {
        0 => pub_key: SEC1EncodedPubKey / SEC1EncodedPubKeyReader,
        1 => payment_script: Script / ScriptReader,
        2 => unlock_script: Script / ScriptReader,
        3 => payment_min_capacity: Uint64 / Uint64Reader,
    }
);
