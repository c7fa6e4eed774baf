// crates/envi_header/src/types.rs

use std::fmt;
use std::str::FromStr;

/// ENVI `data type` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Unsigned8,
    Signed16,
    Signed32,
    Float32,
    Float64,
    Complex32,
    Complex64,
    Unsigned16,
    Unsigned32,
    Signed64,
    Unsigned64,
}

impl DataType {
    pub fn from_code(code: u8) -> Option<Self> {
        let data_type = match code {
            1 => DataType::Unsigned8,
            2 => DataType::Signed16,
            3 => DataType::Signed32,
            4 => DataType::Float32,
            5 => DataType::Float64,
            6 => DataType::Complex32,
            9 => DataType::Complex64,
            12 => DataType::Unsigned16,
            13 => DataType::Unsigned32,
            14 => DataType::Signed64,
            15 => DataType::Unsigned64,
            _ => return None,
        };
        Some(data_type)
    }

    pub fn code(self) -> u8 {
        match self {
            DataType::Unsigned8 => 1,
            DataType::Signed16 => 2,
            DataType::Signed32 => 3,
            DataType::Float32 => 4,
            DataType::Float64 => 5,
            DataType::Complex32 => 6,
            DataType::Complex64 => 9,
            DataType::Unsigned16 => 12,
            DataType::Unsigned32 => 13,
            DataType::Signed64 => 14,
            DataType::Unsigned64 => 15,
        }
    }
}

/// ENVI `byte order`: 0 is little endian, 1 is big endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ByteOrder::LittleEndian),
            1 => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ByteOrder::LittleEndian => 0,
            ByteOrder::BigEndian => 1,
        }
    }
}

/// Band layout of the accompanying image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interleave {
    /// Band sequential.
    Bsq,
    /// Band interleaved by line.
    Bil,
    /// Band interleaved by pixel.
    Bip,
}

impl FromStr for Interleave {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bsq" => Ok(Interleave::Bsq),
            "bil" => Ok(Interleave::Bil),
            "bip" => Ok(Interleave::Bip),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interleave::Bsq => "BSQ",
            Interleave::Bil => "BIL",
            Interleave::Bip => "BIP",
        };
        write!(f, "{name}")
    }
}
