//! Late-bound IDispatch backend.
//!
//! Office exposes its object model through IDispatch (VBScript-style late
//! binding). This module implements [`NativeObject`] over an IDispatch
//! pointer: member names resolve through `GetIDsOfNames`, accesses go
//! through `Invoke` with the PROPERTYGET/PROPERTYPUT/METHOD flags, and
//! values are marshaled between [`Variant`] and the raw COM `VARIANT`.

use std::any::Any;
use std::cell::RefCell;
use std::mem::ManuallyDrop;
use std::ptr;
use std::rc::Rc;

use windows::{
    core::{BSTR, GUID, HSTRING, PCWSTR},
    Win32::{
        Foundation::{DISP_E_EXCEPTION, DISP_E_UNKNOWNNAME, VARIANT_BOOL},
        Globalization::GetSystemDefaultLCID,
        System::{
            Com::{
                CLSIDFromProgID, CoCreateInstance, IDispatch, CLSCTX_LOCAL_SERVER,
                DISPATCH_FLAGS, DISPATCH_METHOD, DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT,
                DISPATCH_PROPERTYPUTREF, DISPPARAMS, EXCEPINFO,
            },
            Ole::DISPID_PROPERTYPUT,
            Variant::{
                VARIANT, VT_BOOL, VT_BSTR, VT_DATE, VT_DISPATCH, VT_EMPTY, VT_I2, VT_I4,
                VT_NULL, VT_R4, VT_R8,
            },
        },
    },
};

use crate::com_guard::ComGuard;
use crate::errors::{AutomationError, AutomationResult};
use crate::object::NativeObject;
use crate::session::Session;
use crate::variant::{ObjectRef, Variant};

// -- VARIANT marshaling --
// The VARIANT struct wraps inner unions in ManuallyDrop, so we use
// ptr::write to set fields without triggering the DerefMut lint.

fn variant_to_com(value: &Variant) -> AutomationResult<VARIANT> {
    // SAFETY: Each arm sets the `vt` discriminant and the matching union
    // field before the VARIANT leaves this function. `ManuallyDrop` on
    // BSTR/IDispatch prevents double-free — COM takes ownership.
    unsafe {
        let mut v = VARIANT::default();
        let inner = &mut *v.Anonymous.Anonymous;
        match value {
            Variant::Empty => {}
            Variant::Null => ptr::write(&mut inner.vt, VT_NULL),
            Variant::Bool(b) => {
                ptr::write(&mut inner.vt, VT_BOOL);
                ptr::write(
                    &mut inner.Anonymous.boolVal,
                    VARIANT_BOOL(if *b { -1 } else { 0 }),
                );
            }
            Variant::I32(i) => {
                ptr::write(&mut inner.vt, VT_I4);
                ptr::write(&mut inner.Anonymous.lVal, *i);
            }
            Variant::F64(f) => {
                ptr::write(&mut inner.vt, VT_R8);
                ptr::write(&mut inner.Anonymous.dblVal, *f);
            }
            Variant::Str(s) => {
                ptr::write(&mut inner.vt, VT_BSTR);
                ptr::write(&mut inner.Anonymous.bstrVal, ManuallyDrop::new(BSTR::from(s)));
            }
            Variant::Date(d) => {
                ptr::write(&mut inner.vt, VT_DATE);
                ptr::write(&mut inner.Anonymous.date, *d);
            }
            Variant::Object(reference) => {
                let disp = match reference.as_object() {
                    None => None,
                    Some(object) => Some(
                        object
                            .as_any()
                            .downcast_ref::<DispatchObject>()
                            .ok_or_else(|| {
                                AutomationError::Conversion(
                                    "object argument does not originate from the COM backend"
                                        .into(),
                                )
                            })?
                            .dispatch()?,
                    ),
                };
                ptr::write(&mut inner.vt, VT_DISPATCH);
                ptr::write(&mut inner.Anonymous.pdispVal, ManuallyDrop::new(disp));
            }
        }
        Ok(v)
    }
}

fn variant_from_com(v: &VARIANT) -> Variant {
    // SAFETY: Accessing the VARIANT union fields. The VARIANT was produced
    // by a COM `Invoke`, so the `vt` discriminant identifies the active arm.
    unsafe {
        let vt = v.Anonymous.Anonymous.vt;
        let inner = &v.Anonymous.Anonymous.Anonymous;
        if vt == VT_EMPTY {
            Variant::Empty
        } else if vt == VT_NULL {
            Variant::Null
        } else if vt == VT_BOOL {
            Variant::Bool(inner.boolVal.0 != 0)
        } else if vt == VT_I2 {
            Variant::I32(i32::from(inner.iVal))
        } else if vt == VT_I4 {
            Variant::I32(inner.lVal)
        } else if vt == VT_R4 {
            Variant::F64(f64::from(inner.fltVal))
        } else if vt == VT_R8 {
            Variant::F64(inner.dblVal)
        } else if vt == VT_DATE {
            Variant::Date(inner.date)
        } else if vt == VT_BSTR {
            Variant::Str(inner.bstrVal.to_string())
        } else if vt == VT_DISPATCH {
            let disp: &Option<IDispatch> = &inner.pdispVal;
            match disp.clone() {
                Some(disp) => Variant::Object(ObjectRef::new(Rc::new(
                    DispatchObject::from_idispatch(disp, "Object"),
                ))),
                None => Variant::Object(ObjectRef::null()),
            }
        } else {
            tracing::debug!(vt = vt.0, "unsupported VARIANT type read as Empty");
            Variant::Empty
        }
    }
}

/// A wrapper around an IDispatch COM object implementing [`NativeObject`].
pub struct DispatchObject {
    class: String,
    inner: RefCell<Option<IDispatch>>,
}

impl DispatchObject {
    /// Wrap an existing IDispatch pointer.
    pub fn from_idispatch(disp: IDispatch, class: &str) -> Self {
        Self {
            class: class.to_string(),
            inner: RefCell::new(Some(disp)),
        }
    }

    fn dispatch(&self) -> AutomationResult<IDispatch> {
        self.inner
            .borrow()
            .clone()
            .ok_or_else(|| AutomationError::StaleObject(self.class.clone()))
    }

    /// Look up the DISPID for a member name.
    fn dispid(&self, disp: &IDispatch, member: &str) -> AutomationResult<i32> {
        // SAFETY: `wide` outlives the call and is null-terminated, so the
        // PCWSTR stays valid for the duration of `GetIDsOfNames`.
        unsafe {
            let wide: Vec<u16> = member.encode_utf16().chain(std::iter::once(0)).collect();
            let names = [PCWSTR(wide.as_ptr())];
            let mut dispid = 0i32;
            disp.GetIDsOfNames(
                &GUID::zeroed(),
                names.as_ptr(),
                1,
                GetSystemDefaultLCID(),
                &mut dispid,
            )
            .map_err(|e| {
                if e.code() == DISP_E_UNKNOWNNAME {
                    AutomationError::MemberNotFound {
                        class: self.class.clone(),
                        member: member.to_string(),
                    }
                } else {
                    AutomationError::Com { source: e }
                }
            })?;
            Ok(dispid)
        }
    }

    fn invoke_raw(
        &self,
        member: &str,
        flags: DISPATCH_FLAGS,
        args: &[Variant],
        named_put: bool,
    ) -> AutomationResult<Variant> {
        let disp = self.dispatch()?;
        let dispid = self.dispid(&disp, member)?;

        // DISPPARAMS requires arguments in reverse order.
        let mut reversed = args
            .iter()
            .rev()
            .map(variant_to_com)
            .collect::<AutomationResult<Vec<VARIANT>>>()?;
        let mut named_args = [DISPID_PROPERTYPUT];

        // SAFETY: `reversed` and `named_args` outlive the `Invoke` call;
        // EXCEPINFO and the result VARIANT are plain out-params.
        unsafe {
            let params = DISPPARAMS {
                rgvarg: if reversed.is_empty() {
                    ptr::null_mut()
                } else {
                    reversed.as_mut_ptr()
                },
                rgdispidNamedArgs: if named_put {
                    named_args.as_mut_ptr()
                } else {
                    ptr::null_mut()
                },
                cArgs: u32::try_from(reversed.len()).unwrap_or(0),
                cNamedArgs: u32::from(named_put),
            };
            let mut result = VARIANT::default();
            let mut except = EXCEPINFO::default();
            disp.Invoke(
                dispid,
                &GUID::zeroed(),
                GetSystemDefaultLCID(),
                flags,
                &params,
                Some(&mut result),
                Some(&mut except),
                None,
            )
            .map_err(|e| invoke_error(&e, &except, member))?;
            Ok(variant_from_com(&result))
        }
    }
}

/// Map an `Invoke` failure, surfacing EXCEPINFO details when present.
fn invoke_error(
    err: &windows::core::Error,
    except: &EXCEPINFO,
    member: &str,
) -> AutomationError {
    if err.code() == DISP_E_EXCEPTION {
        let description = if except.bstrDescription.is_empty() {
            "(no description)".to_string()
        } else {
            except.bstrDescription.to_string()
        };
        AutomationError::ServerFault {
            member: member.to_string(),
            description,
        }
    } else {
        AutomationError::Com {
            source: err.clone(),
        }
    }
}

impl NativeObject for DispatchObject {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn get(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant> {
        self.invoke_raw(member, DISPATCH_PROPERTYGET, args, false)
    }

    fn put(&self, member: &str, value: Variant) -> AutomationResult<()> {
        // Object-valued assignments need PUTREF (VB's `Set x = y`).
        let flags = if matches!(value, Variant::Object(_)) {
            DISPATCH_PROPERTYPUTREF
        } else {
            DISPATCH_PROPERTYPUT
        };
        self.invoke_raw(member, flags, std::slice::from_ref(&value), true)
            .map(|_| ())
    }

    fn invoke(&self, member: &str, args: &[Variant]) -> AutomationResult<Variant> {
        // Office treats many "methods" as indexed property gets; the
        // combined flags are the standard late-binding convention.
        self.invoke_raw(
            member,
            DISPATCH_METHOD | DISPATCH_PROPERTYGET,
            args,
            false,
        )
    }

    fn release(&self) -> u32 {
        // Dropping the IDispatch calls Release through windows-rs; the
        // remaining external count is not observable from here.
        drop(self.inner.borrow_mut().take());
        0
    }

    fn is_alive(&self) -> bool {
        self.inner.borrow().is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// COM-backed [`Session`]: owns the apartment guard and creates server
/// instances from prog ids.
pub struct ComSession {
    _guard: ComGuard,
}

impl ComSession {
    /// Initializes the COM apartment for this thread.
    ///
    /// # Errors
    /// Returns `Err` if COM cannot be initialized in STA mode.
    pub fn new() -> AutomationResult<Self> {
        Ok(Self {
            _guard: ComGuard::new()?,
        })
    }
}

impl Session for ComSession {
    fn create_instance(&self, prog_id: &str) -> AutomationResult<ObjectRef> {
        // SAFETY: Standard COM activation calls; the HSTRING outlives
        // `CLSIDFromProgID` and the returned interface is owned by the
        // DispatchObject from here on.
        unsafe {
            let hstr = HSTRING::from(prog_id);
            let clsid = CLSIDFromProgID(&hstr)?;
            let disp: IDispatch = CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER)?;
            tracing::info!(prog_id, "automation server started");
            Ok(ObjectRef::new(Rc::new(DispatchObject::from_idispatch(
                disp, prog_id,
            ))))
        }
    }
}
