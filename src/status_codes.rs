// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

// This file was autogenerated from StatusCodes.csv by tools/schema/gen_status_codes.js
// DO NOT EDIT THIS FILE
#![allow(non_upper_case_globals)]

bitflags! {
    pub struct StatusCode: u32 {
        // Mask for the status code portion
        const STATUS_MASK = 0xffff_0000;
        // Mask for the bits portion
        const BIT_MASK = 0x0000_ffff;

        // Flags
        const IS_ERROR = 0x8000_0000;
        const IS_UNCERTAIN = 0x4000_0000;

        // Info bits
        const LIMIT_LOW = 0x0100;
        const LIMIT_HIGH = 0x0200;
        const LIMIT_CONSTANT = 0x0300;
        const OVERFLOW = 0x0080;
        const SEMANTICS_CHANGED = 0x4000;
        const STRUCTURE_CHANGED = 0x8000;

        // Status codes
        const Good = 0x0000_0000;
        const GoodClamped = 0x0030_0000;
        const GoodLocalOverride = 0x0096_0000;

        const UncertainInitialValue = 0x4092_0000;
        const UncertainLastUsableValue = 0x4090_0000;

        const BadUnexpectedError = 0x8001_0000;
        const BadInternalError = 0x8002_0000;
        const BadOutOfMemory = 0x8003_0000;
        const BadResourceUnavailable = 0x8004_0000;
        const BadCommunicationError = 0x8005_0000;
        const BadEncodingError = 0x8006_0000;
        const BadDecodingError = 0x8007_0000;
        const BadEncodingLimitsExceeded = 0x8008_0000;
        const BadUnknownResponse = 0x8009_0000;
        const BadTimeout = 0x800a_0000;
        const BadServiceUnsupported = 0x800b_0000;
        const BadNothingToDo = 0x800f_0000;
        const BadTooManyOperations = 0x8010_0000;
        const BadDataTypeIdUnknown = 0x8011_0000;
        const BadNodeIdInvalid = 0x8033_0000;
        const BadNodeIdUnknown = 0x8034_0000;
        const BadAttributeIdInvalid = 0x8035_0000;
        const BadIndexRangeInvalid = 0x8036_0000;
        const BadIndexRangeNoData = 0x8037_0000;
        const BadDataEncodingInvalid = 0x8038_0000;
        const BadDataEncodingUnsupported = 0x8039_0000;
        const BadOutOfRange = 0x803c_0000;
        const BadNotSupported = 0x803d_0000;
        const BadNotFound = 0x803e_0000;
        const BadTypeMismatch = 0x8074_0000;
        const BadInvalidArgument = 0x80ab_0000;
        const BadEndOfStream = 0x80b0_0000;
        const BadRequestTooLarge = 0x80b8_0000;
        const BadResponseTooLarge = 0x80b9_0000;
    }
}

impl StatusCode {
    /// Returns the name of the status code as a string
    pub fn name(&self) -> &'static str {
        match self.status() {
            StatusCode::Good => "Good",
            StatusCode::GoodClamped => "GoodClamped",
            StatusCode::GoodLocalOverride => "GoodLocalOverride",
            StatusCode::UncertainInitialValue => "UncertainInitialValue",
            StatusCode::UncertainLastUsableValue => "UncertainLastUsableValue",
            StatusCode::BadUnexpectedError => "BadUnexpectedError",
            StatusCode::BadInternalError => "BadInternalError",
            StatusCode::BadOutOfMemory => "BadOutOfMemory",
            StatusCode::BadResourceUnavailable => "BadResourceUnavailable",
            StatusCode::BadCommunicationError => "BadCommunicationError",
            StatusCode::BadEncodingError => "BadEncodingError",
            StatusCode::BadDecodingError => "BadDecodingError",
            StatusCode::BadEncodingLimitsExceeded => "BadEncodingLimitsExceeded",
            StatusCode::BadUnknownResponse => "BadUnknownResponse",
            StatusCode::BadTimeout => "BadTimeout",
            StatusCode::BadServiceUnsupported => "BadServiceUnsupported",
            StatusCode::BadNothingToDo => "BadNothingToDo",
            StatusCode::BadTooManyOperations => "BadTooManyOperations",
            StatusCode::BadDataTypeIdUnknown => "BadDataTypeIdUnknown",
            StatusCode::BadNodeIdInvalid => "BadNodeIdInvalid",
            StatusCode::BadNodeIdUnknown => "BadNodeIdUnknown",
            StatusCode::BadAttributeIdInvalid => "BadAttributeIdInvalid",
            StatusCode::BadIndexRangeInvalid => "BadIndexRangeInvalid",
            StatusCode::BadIndexRangeNoData => "BadIndexRangeNoData",
            StatusCode::BadDataEncodingInvalid => "BadDataEncodingInvalid",
            StatusCode::BadDataEncodingUnsupported => "BadDataEncodingUnsupported",
            StatusCode::BadOutOfRange => "BadOutOfRange",
            StatusCode::BadNotSupported => "BadNotSupported",
            StatusCode::BadNotFound => "BadNotFound",
            StatusCode::BadTypeMismatch => "BadTypeMismatch",
            StatusCode::BadInvalidArgument => "BadInvalidArgument",
            StatusCode::BadEndOfStream => "BadEndOfStream",
            StatusCode::BadRequestTooLarge => "BadRequestTooLarge",
            StatusCode::BadResponseTooLarge => "BadResponseTooLarge",
            _ => "Unrecognized status code",
        }
    }
}
