use crate::error::{BinError, Result};
use crate::platform::EmptyFlags;
use std::mem;
use std::ptr;
use tracing::{debug, info};
use winapi::shared::minwindef::{DWORD, HKEY};
use winapi::shared::winerror::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS};
use winapi::um::shellapi::{
    SHEmptyRecycleBinW, SHQueryRecycleBinW, ShellExecuteW, SHERB_NOCONFIRMATION,
    SHERB_NOPROGRESSUI, SHERB_NOSOUND, SHQUERYRBINFO,
};
use winapi::um::winnt::{KEY_SET_VALUE, REG_SZ};
use winapi::um::winreg::{
    RegCloseKey, RegDeleteValueW, RegGetValueW, RegOpenKeyExW, RegSetValueExW, HKEY_CURRENT_USER,
    RRF_RT_REG_DWORD,
};
use winapi::um::winuser::SW_SHOWNORMAL;

const PERSONALIZE_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// Null-terminated UTF-16 for the W-family APIs.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn sherb_bits(flags: EmptyFlags) -> DWORD {
    let mut bits = 0;
    if flags.no_confirmation {
        bits |= SHERB_NOCONFIRMATION;
    }
    if flags.no_sound {
        bits |= SHERB_NOSOUND;
    }
    if flags.no_progress_ui {
        bits |= SHERB_NOPROGRESSUI;
    }
    bits
}

/// Empty the Windows Recycle Bin
pub fn empty_recycle_bin(flags: EmptyFlags) -> Result<()> {
    unsafe {
        let mut info = SHQUERYRBINFO {
            cbSize: mem::size_of::<SHQUERYRBINFO>() as DWORD,
            i64Size: 0,
            i64NumItems: 0,
        };
        if SHQueryRecycleBinW(ptr::null(), &mut info) == 0 && info.i64NumItems == 0 {
            debug!("Recycle Bin is already empty");
            return Ok(());
        }

        info!("Emptying Recycle Bin...");
        let hr = SHEmptyRecycleBinW(ptr::null_mut(), ptr::null(), sherb_bits(flags));
        if hr == 0 {
            info!("Recycle Bin emptied successfully");
            Ok(())
        } else {
            Err(BinError::WindowsError(format!(
                "SHEmptyRecycleBinW failed with HRESULT {hr:#010x}"
            )))
        }
    }
}

/// Open the Recycle Bin folder view in Explorer
pub fn open_recycle_bin() -> Result<()> {
    let operation = wide("open");
    let target = wide("shell:RecycleBinFolder");

    let instance = unsafe {
        ShellExecuteW(
            ptr::null_mut(),
            operation.as_ptr(),
            target.as_ptr(),
            ptr::null(),
            ptr::null(),
            SW_SHOWNORMAL,
        )
    };
    // ShellExecuteW signals success with a value greater than 32.
    if instance as usize > 32 {
        Ok(())
    } else {
        Err(BinError::WindowsError(format!(
            "ShellExecuteW failed with code {}",
            instance as usize
        )))
    }
}

/// Read whether apps use the light theme (AppsUseLightTheme == 1)
pub fn read_light_theme() -> Result<bool> {
    let subkey = wide(PERSONALIZE_KEY);
    let value_name = wide("AppsUseLightTheme");
    let mut data: DWORD = 0;
    let mut size = mem::size_of::<DWORD>() as DWORD;

    let status = unsafe {
        RegGetValueW(
            HKEY_CURRENT_USER,
            subkey.as_ptr(),
            value_name.as_ptr(),
            RRF_RT_REG_DWORD,
            ptr::null_mut(),
            &mut data as *mut DWORD as *mut _,
            &mut size,
        )
    };
    if status == ERROR_SUCCESS as i32 {
        Ok(data == 1)
    } else {
        Err(BinError::WindowsError(format!(
            "RegGetValueW failed with status {status}"
        )))
    }
}

/// Register or unregister the current executable under the per-user Run key
pub fn set_start_at_boot(enabled: bool, app_name: &str) -> Result<()> {
    let exe = std::env::current_exe()?;
    let subkey = wide(RUN_KEY);
    let value_name = wide(app_name);

    unsafe {
        let mut key: HKEY = ptr::null_mut();
        let status = RegOpenKeyExW(
            HKEY_CURRENT_USER,
            subkey.as_ptr(),
            0,
            KEY_SET_VALUE,
            &mut key,
        );
        if status != ERROR_SUCCESS as i32 {
            return Err(BinError::WindowsError(format!(
                "could not open the Run key, status {status}"
            )));
        }

        let status = if enabled {
            let command = wide(&format!("\"{}\"", exe.display()));
            RegSetValueExW(
                key,
                value_name.as_ptr(),
                0,
                REG_SZ,
                command.as_ptr() as *const u8,
                (command.len() * mem::size_of::<u16>()) as DWORD,
            )
        } else {
            match RegDeleteValueW(key, value_name.as_ptr()) {
                // Removing an entry that was never written is fine.
                s if s == ERROR_FILE_NOT_FOUND as i32 => ERROR_SUCCESS as i32,
                s => s,
            }
        };
        RegCloseKey(key);

        if status == ERROR_SUCCESS as i32 {
            debug!("start-at-boot registration set to {enabled}");
            Ok(())
        } else {
            Err(BinError::WindowsError(format!(
                "registry write failed with status {status}"
            )))
        }
    }
}
