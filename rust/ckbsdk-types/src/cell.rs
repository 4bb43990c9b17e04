//! Cells and the references transactions make to them.

use ckbsdk_common::{Result, error::Error};
use ckbsdk_molecule::{Builder, Entity, dynvec, fixed_struct, fixvec, table};

use crate::primitives::{
    Byte, Byte32, Byte32Reader, ByteReader, Uint32, Uint32Reader, Uint64, Uint64Reader,
};
use crate::script::{Script, ScriptOpt, ScriptOptReader, ScriptReader};

fixed_struct!(
    /// Points at output `index` of transaction `tx_hash`.
    OutPoint,
    OutPointReader,
    OutPointBuilder {
        0 => tx_hash: Byte32 / Byte32Reader,
        1 => index: Uint32 / Uint32Reader,
    }
);
fixed_struct!(
    /// A consumed cell together with its `since` lock.
    CellInput,
    CellInputReader,
    CellInputBuilder {
        0 => since: Uint64 / Uint64Reader,
        1 => previous_output: OutPoint / OutPointReader,
    }
);
fixed_struct!(
    CellDep,
    CellDepReader,
    CellDepBuilder {
        0 => out_point: OutPoint / OutPointReader,
        1 => dep_type: Byte / ByteReader,
    }
);
table!(
    CellOutput,
    CellOutputReader,
    CellOutputBuilder {
        0 => capacity: Uint64 / Uint64Reader,
        1 => lock: Script / ScriptReader,
        2 => type_: ScriptOpt / ScriptOptReader,
    }
);

fixvec!(CellDepVec, CellDepVecReader, CellDepVecBuilder, CellDep / CellDepReader);
fixvec!(
    CellInputVec,
    CellInputVecReader,
    CellInputVecBuilder,
    CellInput / CellInputReader
);
dynvec!(
    CellOutputVec,
    CellOutputVecReader,
    CellOutputVecBuilder,
    CellOutput / CellOutputReader
);

/// How a cell dep is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DepType {
    /// The referenced cell itself holds code.
    #[default]
    Code = 0,
    /// The referenced cell holds a list of out points, each expanded into a dep.
    DepGroup = 1,
}

impl TryFrom<u8> for DepType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(DepType::Code),
            1 => Ok(DepType::DepGroup),
            _ => Err(Error::invalid_arg("dep_type", format!("unknown dep type {value}"))),
        }
    }
}

impl From<DepType> for Byte {
    fn from(value: DepType) -> Self {
        Byte::from(value as u8)
    }
}

impl OutPoint {
    pub fn new(tx_hash: Byte32, index: u32) -> OutPoint {
        OutPoint::new_builder()
            .tx_hash(tx_hash)
            .index(index.into())
            .build()
    }
}

impl CellDep {
    pub fn dep_type_kind(&self) -> Result<DepType> {
        DepType::try_from(self.as_reader().dep_type().raw_data()[0])
    }
}

#[cfg(test)]
mod tests {
    use ckbsdk_molecule::Reader;

    use super::*;
    use crate::primitives::Bytes;

    #[test]
    fn test_struct_layout() {
        assert_eq!(OutPoint::SIZE, 36);
        assert_eq!(CellInput::SIZE, 44);
        assert_eq!(CellDep::SIZE, 37);

        let out_point = OutPoint::new(Byte32::from([0xab; 32]), 3);
        assert_eq!(&out_point.as_slice()[32..], &[3, 0, 0, 0]);
        assert_eq!(out_point.index().unpack(), 3);

        let input = CellInput::new_builder()
            .since(0x2000_0000_0000_0001u64.into())
            .previous_output(out_point.clone())
            .build();
        let reader = CellInputReader::from_slice(input.as_slice()).unwrap();
        assert_eq!(reader.since().unpack(), 0x2000_0000_0000_0001);
        assert_eq!(reader.previous_output().to_entity(), out_point);
        assert_eq!(reader.previous_output().tx_hash().to_array(), [0xab; 32]);
    }

    #[test]
    fn test_dep_type() {
        let dep = CellDep::new_builder()
            .dep_type(DepType::DepGroup.into())
            .build();
        assert_eq!(dep.dep_type_kind().unwrap(), DepType::DepGroup);
        assert_eq!(dep.as_slice()[36], 1);
        assert!(DepType::try_from(2).is_err());
        assert_eq!(CellDep::default().dep_type_kind().unwrap(), DepType::Code);
    }

    #[test]
    fn test_cell_output() {
        let lock = Script::new_builder()
            .args(Bytes::from(vec![0x11; 20]))
            .build();
        let output = CellOutput::new_builder()
            .capacity(61_0000_0000u64.into())
            .lock(lock.clone())
            .build();
        let reader = CellOutputReader::from_slice(output.as_slice()).unwrap();
        assert_eq!(reader.capacity().unpack(), 61_0000_0000);
        assert_eq!(reader.lock().to_entity(), lock);
        assert!(reader.type_().is_none());

        let typed = output
            .as_builder()
            .type_(Script::default().into())
            .build();
        assert!(typed.type_().is_some());
        assert_eq!(
            typed.as_slice().len(),
            output.as_slice().len() + Script::default().as_slice().len()
        );

        let outputs: CellOutputVec = [output, typed].into_iter().collect();
        let reader = CellOutputVecReader::from_slice(outputs.as_slice()).unwrap();
        assert_eq!(reader.len(), 2);
        assert!(reader.get(1).unwrap().type_().is_some());
    }

    #[test]
    fn test_input_vec() {
        let inputs: CellInputVec = (0..3)
            .map(|i| {
                CellInput::new_builder()
                    .previous_output(OutPoint::new(Byte32::default(), i))
                    .build()
            })
            .collect();
        assert_eq!(inputs.as_slice().len(), 4 + 3 * CellInput::SIZE);
        assert_eq!(inputs.get(2).unwrap().previous_output().index().unpack(), 2);
        assert!(CellInputVec::from_slice(&inputs.as_slice()[..50]).is_err());
    }
}
